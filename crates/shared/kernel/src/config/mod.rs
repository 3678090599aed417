use config::{Config, Environment, File};
use ortx_domain::config::OpsConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "ortx";

/// Prefix of environment overrides (`ORTX__SCRIPT_OPS__ENABLED=false`).
pub const ENV_PREFIX: &str = "ORTX";

/// Custom error type for config loading.
#[ortx_derive::ortx_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration layered from a file and `ORTX__` environment overrides.
///
/// 1. **Base file**: `path`, or [`DEFAULT_CONFIG_PATH`] when `None`; the format is picked
///    from the extension, or probed (`.toml`, `.json`, `.yaml`, ...) when the path has none.
///    An explicit `path` must exist; the default file is optional, and without it the
///    serde defaults of `T` apply.
/// 2. **Environment**: variables prefixed with `ORTX__`, nested with `__`
///    (`ORTX__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a value cannot be parsed,
/// or the merged result does not match `T`.
///
/// # Example
/// ```rust,no_run
/// use ortx_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     threads: u16,
/// }
///
/// let cfg: HostConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// [`load_config`] specialised to [`OpsConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_ops_config(path: Option<impl AsRef<Path>>) -> Result<OpsConfig, ConfigError> {
    load_config::<OpsConfig>(path)
}
