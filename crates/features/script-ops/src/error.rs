use std::borrow::Cow;

/// Failures surfaced by the adapter hand-off and the dispatch gate.
///
/// Discovery and toggling never fail; they are total.
#[ortx_derive::ortx_error]
pub enum ScriptOpError {
    /// The schema cannot be expressed as a descriptor record.
    #[error("Invalid operator schema{}: {message}", format_context(.context))]
    InvalidSchema { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An operator with the same name and version is already registered.
    #[error("Duplicate operator{}: {message}", format_context(.context))]
    Duplicate { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Discovery already ran; the descriptor sequence no longer changes.
    #[error("Operator catalog sealed{}: {message}", format_context(.context))]
    Sealed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The operator was not discovered from this subsystem's catalog.
    #[error("Unknown operator{}: {message}", format_context(.context))]
    UnknownOp { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The subsystem is disabled; no new dispatch may start.
    #[error("Scripting operators disabled{}: {message}", format_context(.context))]
    Disabled { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
