use ortx_kernel::config::{ConfigError, load_config, load_ops_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_ops_config_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("ortx.toml");
    fs::write(
        &path,
        r#"
[script_ops]
enabled = false

[logging]
level = "debug"
json = true
"#,
    )?;

    let cfg = load_ops_config(Some(&path))?;
    assert!(!cfg.script_ops.enabled);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert!(cfg.logging.path.is_none());
    Ok(())
}

#[test]
fn partial_file_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n")?;

    let cfg = load_ops_config(Some(&path))?;
    assert!(cfg.script_ops.enabled, "script ops default to enabled");
    assert_eq!(cfg.logging.level, "warn");
    Ok(())
}

#[test]
fn extensionless_path_probes_known_formats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("host.json"), r#"{ "script_ops": { "enabled": false } }"#)?;

    let cfg = load_ops_config(Some(dir.path().join("host")))?;
    assert!(!cfg.script_ops.enabled);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<fixtures::Empty>(Some(dir.path().join("absent.toml")))
        .expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

mod fixtures {
    #[derive(Debug, serde::Deserialize)]
    pub struct Empty {}
}
