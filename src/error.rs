//! Error types for the registration core

use crate::state::FieldId;
use thiserror::Error;

/// A field failed validation
///
/// Always recoverable: the user fixes the text and the error goes away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The submission collaborator could not complete the registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Transport-level failure (timeout, connection lost, ...)
    #[error("network error: {0}")]
    Network(String),
    /// The registration service refused the request
    #[error("registration rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = ValidationError::new(FieldId::Name, "Full name is required");
        assert_eq!(err.to_string(), "Full name is required");
        assert_eq!(err.field, FieldId::Name);
    }

    #[test]
    fn test_submission_error_display() {
        let err = SubmissionError::Network("timed out".to_string());
        assert_eq!(err.to_string(), "network error: timed out");

        let err = SubmissionError::Rejected("webinar full".to_string());
        assert_eq!(err.to_string(), "registration rejected: webinar full");
    }
}
