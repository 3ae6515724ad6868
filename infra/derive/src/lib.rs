#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates. Currently a single attribute,
//! [`macro@ans_error`], that turns a plain enum into a `thiserror` error with
//! context support.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into an error type whose variants can carry a context string.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless already derived.
/// * `<Name>Ext<T>` with `.context(...)`, implemented for `Result<T, Name>` and for
///   `Result<T, Source>` of every wrapped source type. Context added to an error that
///   already has one is prepended: `outer: inner`.
/// * `From<Source>` for variants with a `source` field. When several variants wrap the
///   same type, the first one declared owns the conversion.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-level `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. A variant with `source` must also have
/// `context: Option<Cow<'static, str>>`. `#[from]` is rejected because the conversions
/// are generated here.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ans_derive::ans_error]
/// pub enum StoreError {
///     #[error("Store I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &Path) -> Result<Vec<u8>, StoreError> {
///     std::fs::read(path).context(format!("Reading {}", path.display()))
/// }
/// ```
#[proc_macro_attribute]
pub fn ans_error(args: TokenStream, item: TokenStream) -> TokenStream {
    if !args.is_empty() {
        let args = proc_macro2::TokenStream::from(args);
        return syn::Error::new_spanned(args, "ans_error takes no arguments")
            .to_compile_error()
            .into();
    }
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).into()
}
