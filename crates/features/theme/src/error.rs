use std::borrow::Cow;

/// Failures while reading or writing the persisted preference.
#[ans_derive::ans_error]
pub enum ThemeError {
    #[error("Preference I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Preference file is not valid JSON{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal theme error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
