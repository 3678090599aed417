//! Kernel utilities shared across `ortx` crates.
//! Keep this crate lightweight; it re-exports the domain models and the layered config loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use ortx_kernel::config::load_ops_config;
//!
//! let cfg = load_ops_config(Some("ortx")).unwrap_or_default();
//! let _enabled = cfg.script_ops.enabled;
//! ```
pub mod config;
pub mod prelude;

pub use ortx_domain as domain;
