//! Domain error types

use crate::chat::value_objects::SubmissionId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No placeholder found for submission {0}")]
    UnknownSubmission(SubmissionId),

    #[error("Operation cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_submission_display() {
        let error = DomainError::UnknownSubmission(SubmissionId::new(7));
        assert_eq!(error.to_string(), "No placeholder found for submission #7");
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(DomainError::Cancelled.to_string(), "Operation cancelled");
    }
}
