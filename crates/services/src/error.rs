//! Shared error types for the services crate.

use thiserror::Error;

/// Errors the question provider can hit before the fallback applies.
///
/// These never escape [`crate::QuestionService::fetch_questions`]; the
/// public surface swallows them and serves the fallback set instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionProviderError {
    #[error("question generation is not configured")]
    Disabled,
    #[error("provider returned no usable questions")]
    EmptyResponse,
    #[error("provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider reply was not the expected JSON array: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
