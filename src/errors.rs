// src/errors.rs
use thiserror::Error;

/// Shown for every remote failure; the actual cause only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,
}

impl SolveError {
    /// True for errors raised locally before any request is issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, SolveError::Validation(_))
    }

    /// The message safe to show the end user. Validation errors are already
    /// user-facing; every remote failure collapses to one fixed string.
    pub fn user_message(&self) -> String {
        match self {
            SolveError::Validation(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_their_message() {
        let err = SolveError::Validation("Enter problem text or upload an image.".to_string());
        assert_eq!(err.user_message(), "Enter problem text or upload an image.");
        assert!(err.is_validation());
    }

    #[test]
    fn remote_errors_collapse_to_the_fixed_message() {
        let errors = vec![
            SolveError::ApiError {
                status: 429,
                body: "quota exceeded".to_string(),
            },
            SolveError::ApiResponse("internal".to_string()),
            SolveError::UnexpectedResponse("{}".to_string()),
            SolveError::EmptyResponse,
        ];

        for err in errors {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
            assert!(!err.is_validation());
        }
    }
}
