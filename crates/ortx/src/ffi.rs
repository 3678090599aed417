//! C exports. Declarations live in `include/ortx.h`.
//!
//! The discovery and toggle symbols are only emitted with the `script-ops` feature, so a
//! host built against a library without it fails at link time instead of at run time.
#![allow(unsafe_code)]

use ortx_domain::constants::{OP_DOMAIN, OP_DOMAIN_CSTR};
use std::ffi::c_char;

const fn nul_terminated<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    assert!(bytes.len() + 1 == N, "buffer must fit the string and its NUL");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < bytes.len() {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

/// `const char ORTX_OP_DOMAIN[]`: the operator domain, NUL-terminated.
#[unsafe(no_mangle)]
pub static ORTX_OP_DOMAIN: [u8; OP_DOMAIN.len() + 1] = nul_terminated(OP_DOMAIN);

/// Pointer to the NUL-terminated operator domain; valid for the process lifetime.
#[unsafe(no_mangle)]
pub extern "C" fn ortx_op_domain() -> *const c_char {
    OP_DOMAIN_CSTR.as_ptr()
}

#[cfg(feature = "script-ops")]
pub use script::*;

#[cfg(feature = "script-ops")]
mod script {
    use ortx_script::RawOpDescriptor;

    /// Returns the first scripting-operator record and writes the record count to `count`.
    ///
    /// The pointer is never null. The records are owned by the library and stay valid for
    /// the rest of the process; the caller must not free them.
    ///
    /// # Safety
    /// `count` must be null or valid for writing one `size_t`. A null `count` is skipped.
    #[unsafe(no_mangle)]
    pub unsafe extern "C" fn ortx_fetch_script_ops(count: *mut usize) -> *const RawOpDescriptor {
        let ops = ortx_script::fetch_script_ops_raw();
        if !count.is_null() {
            // SAFETY: non-null and writable per the caller contract.
            unsafe { count.write(ops.len()) };
        }
        ops.as_ptr()
    }

    /// Sets the scripting subsystem's enabled flag; returns the previous value.
    #[unsafe(no_mangle)]
    pub extern "C" fn ortx_enable_script_ops(enable: bool) -> bool {
        ortx_script::enable_script_ops(enable)
    }

    #[unsafe(no_mangle)]
    pub extern "C" fn ortx_script_ops_enabled() -> bool {
        ortx_script::script_ops_enabled()
    }
}
