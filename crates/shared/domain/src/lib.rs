//! # Domain Models
//!
//! Pure types shared by every `ortx` crate: the operator domain identifier,
//! operator schemas and element types, discovery-source flags and configuration.
//! Keep it lean: no I/O, no global state, minimal dependencies (`serde`, `bitflags`).

pub mod config;
pub mod constants;
pub mod descriptor;
pub mod features;
