//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for `ortx` hosts and tools.
//!
//! * Console output (compact, ANSI, on stderr) and/or rolling file output through a
//!   non-blocking writer.
//! * Level and filter directives come from the builder, from
//!   [`LoggingConfig`], and finally from the `ORTX_LOG` environment variable.
//!
//! ## Example
//!
//! ```rust
//! use ortx_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("ortx-inspect")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use ortx_domain::config::LoggingConfig;
use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Environment variable holding filter directives, e.g. `ortx_script=debug`.
pub const LOG_ENV: &str = "ORTX_LOG";

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone)]
struct Settings {
    console: bool,
    json: bool,
    level: LevelFilter,
    directives: Option<String>,
    directory: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            json: false,
            level: LevelFilter::INFO,
            directives: None,
            directory: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}

/// Builder for the global subscriber; a name is required before [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed> {
    settings: Settings,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; the name prefixes rolling log files (`ortx-inspect.2026-10-19.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    /// Minimum level used when no directive matches.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (`ortx_script=debug,ortx_kernel=warn`).
    ///
    /// `ORTX_LOG` is ignored when directives are set here.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Formats every enabled output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Writes rolling log files into `directory` (created on init).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.settings.directory = Some(directory.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Applies a [`LoggingConfig`] section on top of the current settings.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] when `level` is not a level name.
    pub fn configure(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.settings.level = LevelFilter::from_str(config.level.trim()).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid level '{}': {e}", config.level).into(),
                context: None,
            }
        })?;
        self.settings.json = config.json;
        if let Some(path) = &config.path {
            self.settings.directory = Some(path.clone());
        }
        Ok(self)
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown; dropping it stops the
    /// background file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   malformed directives or no enabled output.
    /// * [`LoggerError::Appender`] if the log directory cannot be prepared.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name) } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            let console = fmt::layer().with_writer(std::io::stderr).with_target(true);
            layers.push(if settings.json {
                console.json().boxed()
            } else {
                console.compact().with_ansi(true).boxed()
            });
        }

        let guard = match &settings.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(&settings, &name, directory)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled; enable the console or set a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { name, guard })
    }
}

fn file_layer(
    settings: &Settings,
    name: &str,
    directory: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(settings.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.max_files)
        .build(directory)
        .context("Preparing rolling log files")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if settings.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder =
        EnvFilter::builder().with_default_directive(settings.level.into()).with_env_var(LOG_ENV);

    match &settings.directives {
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid filter '{directives}': {e}").into(),
                context: None,
            })
        },
        None => Ok(builder.from_env_lossy()),
    }
}

/// Handle to the installed subscriber; owns the file writer's worker guard.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    name: String,
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log files");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("unit");
        assert!(builder.settings.console);
        assert!(!builder.settings.json);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
        assert!(builder.settings.directory.is_none());
    }

    #[test]
    fn configure_applies_logging_section() -> Result<(), LoggerError> {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            json: true,
            path: Some(PathBuf::from("/tmp/ortx-unit")),
        };

        let builder = Logger::builder().name("unit").configure(&config)?;
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
        assert!(builder.settings.json);
        assert_eq!(builder.settings.directory.as_deref(), Some(config.path.as_deref().unwrap()));
        Ok(())
    }

    #[test]
    fn configure_rejects_unknown_level() {
        let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder().name("unit").configure(&config).expect_err("bad level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn init_rejects_blank_name_before_touching_globals() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn init_rejects_zero_max_files() {
        let err = Logger::builder().name("unit").max_files(0).init().expect_err("zero files");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn init_rejects_no_outputs() {
        let err = Logger::builder().name("unit").console(false).init().expect_err("no layers");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_directives_are_reported() {
        let settings = Settings { directives: Some("[[[".to_owned()), ..Settings::default() };
        assert!(matches!(env_filter(&settings), Err(LoggerError::InvalidConfiguration { .. })));
    }
}
