//! Facade crate for the `ortx` custom operator library.
//! Re-exports the domain and kernel primitives, gates the optional scripting subsystem
//! and carries the C exports hosts link against.
//! Keep this crate thin: it composes other crates and owns the boundary, nothing more.
//!
//! ## Usage
//! - Add `ortx` with the desired feature flags (`script-ops`).
//! - Call [`bootstrap`] from the host's initialization path.
//! - C hosts load the `cdylib` and use `include/ortx.h`.

pub mod ffi;

use ortx_domain::config::OpsConfig;
pub use ortx_domain as domain;
pub use ortx_domain::constants::OP_DOMAIN;
pub use ortx_domain::features::OpSources;
pub use ortx_kernel as kernel;
#[cfg(feature = "script-ops")]
pub use ortx_script as script;
use serde::Serialize;
use tracing::info;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "script-ops")]
        "script-ops",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Discovery sources compiled into this build. [`OpSources::NATIVE`] is always present.
#[must_use]
pub const fn compiled_sources() -> OpSources {
    if cfg!(feature = "script-ops") { OpSources::ALL } else { OpSources::NATIVE }
}

/// What the host learns during initialization.
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    pub domain: &'static str,
    pub sources: OpSources,
    #[cfg(feature = "script-ops")]
    pub script: ScriptDiscovery,
}

/// State of the scripting subsystem after [`bootstrap`] applied the configuration.
#[cfg(feature = "script-ops")]
#[derive(Debug, Clone, Serialize)]
pub struct ScriptDiscovery {
    pub previously_enabled: bool,
    pub enabled: bool,
    pub ops: Vec<ortx_domain::descriptor::OpSchema>,
}

/// Runs the host-side initialization sequence against the process-wide state.
///
/// Reads the domain and, when scripting operators are compiled in, applies
/// `config.script_ops` through the toggle and discovers the registered operators.
#[cfg_attr(not(feature = "script-ops"), allow(unused_variables))]
pub fn bootstrap(config: &OpsConfig) -> Discovery {
    let sources = compiled_sources();
    info!(domain = OP_DOMAIN, sources = ?sources.names(), "Bootstrapping custom operators");

    Discovery {
        domain: OP_DOMAIN,
        sources,
        #[cfg(feature = "script-ops")]
        script: bootstrap_script(config),
    }
}

#[cfg(feature = "script-ops")]
fn bootstrap_script(config: &OpsConfig) -> ScriptDiscovery {
    let ops = ortx_script::ScriptOps::global();
    let previously_enabled = ops.apply_config(&config.script_ops);
    let discovered = ops.fetch();

    info!(count = discovered.len(), enabled = ops.is_enabled(), "Script operators discovered");

    ScriptDiscovery {
        previously_enabled,
        enabled: ops.is_enabled(),
        ops: discovered.iter().map(ortx_script::OpDescriptor::to_schema).collect(),
    }
}
