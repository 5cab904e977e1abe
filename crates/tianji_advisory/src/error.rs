//! Error types for advisory generation.

use thiserror::Error;

/// Failures talking to the text service or reading its reply.
///
/// None of these are fatal to a chart request; callers degrade to
/// placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdvisoryError {
    #[error("invalid advisory config: {0}")]
    InvalidConfig(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("service returned no text")]
    EmptyResponse,
    #[error("no JSON object in response")]
    MissingJson,
    #[error("malformed JSON: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AdvisoryError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for AdvisoryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
