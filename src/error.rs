//! Error types for the completion client and the suggestion service.

use thiserror::Error;

/// Failures from a single chat-completion call.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Azure OpenAI API request failed: HTTP {status} - {body}")]
    UpstreamRequestFailed { status: u16, body: String },

    #[error("operation was cancelled")]
    Cancelled,

    #[error("failed to reach the completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid value for header '{0}'")]
    InvalidHeader(String, #[source] reqwest::header::InvalidHeaderValue),
}

/// Failures surfaced by [`crate::service::SuggestionService`].
#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("{parameter} cannot be empty")]
    InvalidArgument { parameter: &'static str },

    #[error("operation was cancelled")]
    OperationCancelled,

    #[error("Failed to generate commit message suggestions: {source}")]
    SuggestionGenerationFailed {
        #[source]
        source: CompletionError,
    },
}

impl SuggestionError {
    /// The parameter name carried by an `InvalidArgument`, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            SuggestionError::InvalidArgument { parameter } => Some(*parameter),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SuggestionError::OperationCancelled)
    }
}

impl From<CompletionError> for SuggestionError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Cancelled => SuggestionError::OperationCancelled,
            other => SuggestionError::SuggestionGenerationFailed { source: other },
        }
    }
}
