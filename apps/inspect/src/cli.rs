use anyhow::Context;
use clap::Parser;
use ortx::kernel::config::DEFAULT_CONFIG_PATH;
use ortx::kernel::prelude::{OpsConfig, load_ops_config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ortx-inspect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Show the operator domain and the operators a host would discover")]
pub(crate) struct Cli {
    /// Configuration file; `ortx.*` in the working directory is used when present
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Override `script_ops.enabled` from the configuration
    #[arg(long, value_name = "BOOL")]
    pub(crate) enable_script_ops: Option<bool>,

    /// Print the discovery snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl Cli {
    /// The effective configuration: file, `ORTX__` environment, then command-line overrides.
    ///
    /// An explicit `--config` must load; the default file is optional.
    pub(crate) fn resolve_config(&self) -> anyhow::Result<OpsConfig> {
        let mut config = load_ops_config(self.config.as_deref()).with_context(|| {
            format!("Failed to load configuration from {}", self.config_source())
        })?;

        if let Some(enabled) = self.enable_script_ops {
            config.script_ops.enabled = enabled;
        }
        Ok(config)
    }

    /// Where the base configuration file is looked up, for diagnostics.
    pub(crate) fn config_source(&self) -> String {
        self.config.as_deref().map_or_else(
            || format!("{DEFAULT_CONFIG_PATH}.* (optional)"),
            |path| path.display().to_string(),
        )
    }
}
