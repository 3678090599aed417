pub use crate::config::{ConfigError, ConfigErrorExt, load_config, load_ops_config};
pub use ortx_domain::config::{LoggingConfig, OpsConfig, ScriptOpsConfig};
pub use ortx_domain::constants::OP_DOMAIN;
pub use ortx_domain::descriptor::{ElementType, OpKey, OpSchema};
pub use ortx_domain::features::OpSources;
