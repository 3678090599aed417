use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration consumed by hosts embedding the library.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpsConfigInner {
    pub script_ops: ScriptOpsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct OpsConfig {
    #[serde(flatten, default)]
    inner: Arc<OpsConfigInner>,
}

impl Deref for OpsConfig {
    type Target = OpsConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for OpsConfig {
    fn deref_mut(&mut self) -> &mut OpsConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Scripting-operator subsystem settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptOpsConfig {
    /// Desired state of the subsystem once the host has bootstrapped.
    pub enabled: bool,
}

/// Logging settings for host-side tooling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Emit file logs as JSON.
    pub json: bool,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
}

// --- Default ---

impl Default for ScriptOpsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}
