//! # Scripting Operators
//!
//! Optional subsystem exposing custom operators whose kernels live in an embedded
//! scripting interpreter. The interpreter and its adapters are external; they hand
//! their operator schemas over through [`register_script_op`] and the host discovers
//! them through [`fetch_script_ops`].
//!
//! ## Lifecycle
//!
//! 1.  **Registration:** adapters register [`OpSchema`]s. Order is kept.
//! 2.  **Discovery:** the first fetch seals the catalog. Later fetches return the same
//!     sequence at the same address for the rest of the process.
//! 3.  **Toggle:** [`enable_script_ops`] flips a process-wide flag (initially enabled)
//!     and returns the previous state. It never touches the catalog.
//! 4.  **Dispatch:** hosts call [`ScriptOps::begin_dispatch`] before running an
//!     operator; it is refused while disabled. Running dispatches are never interrupted.
//!
//! ## Example
//!
//! ```rust
//! use ortx_domain::descriptor::{ElementType, OpSchema};
//! use ortx_script::ScriptOps;
//!
//! let ops = ScriptOps::new();
//! ops.register(OpSchema::new("StringUpper").input(ElementType::String).output(ElementType::String))
//!     .unwrap();
//!
//! let previous = ops.set_enabled(false);
//! assert!(previous);
//! assert_eq!(ops.fetch().len(), 1);
//! ```

mod catalog;
pub mod descriptor;
mod error;
mod subsystem;

pub use crate::descriptor::{OpDescriptor, RawOpDescriptor};
pub use crate::error::{ScriptOpError, ScriptOpErrorExt};
pub use crate::subsystem::{DispatchPermit, ScriptOps};
pub use ortx_domain::descriptor::{ElementType, OpKey, OpSchema};

/// Registers an operator with the process-wide subsystem.
///
/// # Errors
/// See [`ScriptOps::register`].
pub fn register_script_op(schema: OpSchema) -> Result<(), ScriptOpError> {
    ScriptOps::global().register(schema)
}

/// Discovers the process-wide scripting operators; seals the catalog on first call.
pub fn fetch_script_ops() -> &'static [OpDescriptor] {
    ScriptOps::global().fetch()
}

/// C view of [`fetch_script_ops`].
pub fn fetch_script_ops_raw() -> &'static [RawOpDescriptor] {
    ScriptOps::global().fetch_raw()
}

/// Sets the process-wide enabled flag and returns the previous value.
pub fn enable_script_ops(enable: bool) -> bool {
    ScriptOps::global().set_enabled(enable)
}

pub fn script_ops_enabled() -> bool {
    ScriptOps::global().is_enabled()
}
