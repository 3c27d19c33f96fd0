//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// There are two kinds: validation failures (an invalid primitive input,
/// detected synchronously at construction or mutation time) and policy
/// conflicts (a cross-field combination that violates a business rule).
/// Neither is caught or translated here; both propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A primitive input failed a validation rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A cross-field combination violates a business rule
    #[error("Policy conflict: {0}")]
    PolicyConflict(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(rule: impl Into<String>) -> Self {
        Self::Validation(rule.into())
    }

    /// Create a policy conflict error
    pub fn policy(rule: impl Into<String>) -> Self {
        Self::PolicyConflict(rule.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_helper_creates_correct_variant() {
        let err = DomainError::validation("name too short");
        assert_eq!(err, DomainError::Validation("name too short".to_string()));
    }

    #[test]
    fn validation_error_message_is_correct() {
        let err = DomainError::validation("File size cannot be negative");
        assert_eq!(
            err.to_string(),
            "Validation failed: File size cannot be negative"
        );
    }

    #[test]
    fn policy_error_message_is_correct() {
        let err = DomainError::policy("Public file must be downloadable");
        assert_eq!(
            err.to_string(),
            "Policy conflict: Public file must be downloadable"
        );
    }

    #[test]
    fn invalid_email_error_message() {
        let err = DomainError::InvalidEmail("missing @".to_string());
        assert_eq!(err.to_string(), "Invalid email address: missing @");
    }
}
