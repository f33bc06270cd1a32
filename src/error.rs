//! Domain-specific error types for thought-labeler

use thiserror::Error;

/// Main error type for the thought labeling operations
#[derive(Error, Debug)]
pub enum ThoughtLabelerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<reqwest::Error> for ThoughtLabelerError {
    fn from(err: reqwest::Error) -> Self {
        ThoughtLabelerError::Api {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<serde_json::Error> for ThoughtLabelerError {
    fn from(err: serde_json::Error) -> Self {
        ThoughtLabelerError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for thought-labeler operations
pub type Result<T> = std::result::Result<T, ThoughtLabelerError>;
