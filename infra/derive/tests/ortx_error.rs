#[test]
fn ortx_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ortx_error_pass.rs");
    t.pass("tests/ui/ortx_error_cfg_variant.rs");
}
