use ortx_domain::config::LoggingConfig;
use ortx_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_directory_receives_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "info".to_owned(),
        json: true,
        path: Some(log_dir.clone()),
    };

    let logger =
        Logger::builder().name("integration-file").console(false).configure(&config)?.init()?;
    assert!(logger.has_file_output());

    tracing::info!(domain = "ai.onnx.contrib", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("hello from integration test"));
    assert!(contents.trim_start().starts_with('{'), "json output expected");

    Ok(())
}
