//! Operator domain identifiers.
//!
//! [`OP_DOMAIN`] is part of the binary contract: hosts pin operator lookups to
//! `(domain, name, version)` triples, so the value never changes between releases.

use std::ffi::CStr;

/// Namespace under which every operator of this library is registered.
pub const OP_DOMAIN: &str = "ai.onnx.contrib";

/// [`OP_DOMAIN`] as a NUL-terminated string for the C ABI.
pub const OP_DOMAIN_CSTR: &CStr = c"ai.onnx.contrib";

/// The default ONNX operator set domain.
pub const STANDARD_DOMAIN: &str = "";

/// Explicit spelling of the default ONNX domain.
pub const STANDARD_DOMAIN_ALIAS: &str = "ai.onnx";

/// The ONNX-ML operator set domain.
pub const ML_DOMAIN: &str = "ai.onnx.ml";

/// Domains owned by the host engine itself; custom operators never use these.
pub const RESERVED_DOMAINS: &[&str] = &[STANDARD_DOMAIN, STANDARD_DOMAIN_ALIAS, ML_DOMAIN];

/// Layout revision of the C descriptor record.
pub const DESCRIPTOR_VERSION: u32 = 1;

/// Returns `true` when `domain` belongs to the host engine's built-in operator sets.
#[must_use]
pub fn is_reserved_domain(domain: &str) -> bool {
    RESERVED_DOMAINS.contains(&domain)
}
