use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A result row keyed by column name.
pub type Row = Map<String, Value>;

/// Body of `POST /ai/ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self { question: question.into() }
    }
}

/// Answer from the AI analyst.
///
/// The server omits fields depending on the outcome, so everything defaults.
/// A refused or empty answer still arrives as a success with `error` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AskResponse {
    pub sql: Option<String>,
    pub data: Vec<Row>,
    pub count: u64,
    pub error: Option<String>,
}

impl AskResponse {
    /// Column names taken from the first row.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.data.first().map(|row| row.keys().map(String::as_str).collect()).unwrap_or_default()
    }
}
