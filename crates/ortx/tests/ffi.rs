use ortx::OP_DOMAIN;
use ortx::ffi::{ORTX_OP_DOMAIN, ortx_op_domain};
use std::ffi::CStr;

#[test]
fn exported_domain_is_nul_terminated() {
    let domain = CStr::from_bytes_with_nul(&ORTX_OP_DOMAIN).expect("single trailing NUL");
    assert_eq!(domain.to_str(), Ok(OP_DOMAIN));
    assert_eq!(OP_DOMAIN, "ai.onnx.contrib");
}

#[test]
fn domain_accessor_is_stable() {
    let first = ortx_op_domain();
    let second = ortx_op_domain();
    assert_eq!(first, second);
    assert!(!first.is_null());

    // SAFETY: the pointer targets a `'static` C string.
    #[allow(unsafe_code)]
    let domain = unsafe { CStr::from_ptr(first) };
    assert_eq!(domain.to_bytes(), OP_DOMAIN.as_bytes());
}
