#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the `ortx` workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ortx-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for the workspace's error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant with a `message` field exists.
/// * **`format_context`** helper for `#[error(..)]` strings, rendering ` (context)` or nothing.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use ortx_derive::ortx_error;
/// use std::borrow::Cow;
///
/// #[ortx_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading operator manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn ortx_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
