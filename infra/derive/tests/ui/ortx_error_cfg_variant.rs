use ortx_derive::ortx_error;
use std::borrow::Cow;

#[ortx_error]
#[derive(Debug)]
pub enum GatedError {
    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Gated { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[error("Disabled{}: {message}", format_context(.context))]
    Disabled { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = GatedError::Disabled { message: "off".into(), context: None };
    assert_eq!(err.to_string(), "Disabled: off");
}
