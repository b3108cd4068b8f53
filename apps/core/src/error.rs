use std::io;
use thiserror::Error;

/// Message shown to users whenever an explanation request fails.
pub const USER_FACING_FAILURE: &str =
    "Unable to analyze the documentation at this time. Please check your content and try again.";

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An uploaded file was refused by the intake collaborator.
    #[error("Upload rejected: {0}")]
    Intake(String),

    /// A new request was submitted while another one is still in flight.
    #[error("An explanation request is already in progress")]
    Busy,

    /// Communication failure with the session actor.
    #[error("Actor error: {0}")]
    Actor(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Serialization of a finished artifact failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// The text a UI should display for this failure.
    ///
    /// Intake and busy errors describe something the user can act on directly;
    /// everything else collapses to the single opaque failure message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Intake(reason) => reason.clone(),
            AppError::Busy => "Please wait for the current explanation to finish.".to_string(),
            _ => USER_FACING_FAILURE.to_string(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Intake(s) => AppError::Intake(s.clone()),
            AppError::Busy => AppError::Busy,
            AppError::Actor(s) => AppError::Actor(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
            AppError::Export(s) => AppError::Export(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Explanation task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Export(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_are_opaque_to_users() {
        let err = AppError::Internal("template bank empty".to_string());
        assert_eq!(err.user_message(), USER_FACING_FAILURE);

        let err = AppError::Timeout("reply".to_string());
        assert_eq!(err.user_message(), USER_FACING_FAILURE);
    }

    #[test]
    fn test_intake_reason_is_shown() {
        let err = AppError::Intake("File size must be less than 5MB".to_string());
        assert_eq!(err.user_message(), "File size must be less than 5MB");
    }

    #[test]
    fn test_clone_preserves_variant() {
        let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant {:?}", other),
        }
    }
}
