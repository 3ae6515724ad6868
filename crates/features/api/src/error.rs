use std::borrow::Cow;

/// Failures of the API layer.
///
/// Transport errors, timeouts and non-success statuses all arrive as
/// [`ApiError::Request`] with the original [`reqwest::Error`] intact.
///
/// `Request` is declared first so `?` and `.context(..)` on a `reqwest` result land there.
#[ans_derive::ans_error]
pub enum ApiError {
    #[error("Request failed{}: {source}", format_context(.context))]
    Request { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed{}: {source}", format_context(.context))]
    Build { source: reqwest::Error, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn source_error(&self) -> &reqwest::Error {
        match self {
            Self::Build { source, .. } | Self::Request { source, .. } => source,
        }
    }

    /// The call ran past the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source_error().is_timeout()
    }

    /// The server answered with a non-success status.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.source_error().status()
    }
}
