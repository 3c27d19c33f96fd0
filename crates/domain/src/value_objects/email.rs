//! Email address value object with validation
//!
//! Provides a validated email address type that ensures proper format.
//!
//! # Examples
//!
//! ```
//! use domain::Email;
//!
//! let email = Email::new("user@example.com").unwrap();
//! assert_eq!(email.value(), "user@example.com");
//!
//! // Invalid emails are rejected
//! assert!(Email::new("invalid").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Accepted shape: `local@domain.tld` where the local part allows
/// letters/digits/`._%+-`, the domain allows letters/digits/`.-`, and the
/// top-level domain is at least two letters.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// A validated email address
///
/// The value is stored exactly as supplied; only the format is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Email {
    #[validate(regex(path = *EMAIL_PATTERN, message = "Invalid email format"))]
    value: String,
}

impl Email {
    /// Create a new email address, validating the format
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or does not match the
    /// `local@domain.tld` format.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidEmail(
                "Email cannot be blank".to_string(),
            ));
        }

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|_| DomainError::InvalidEmail("Invalid email format".to_string()))?;

        Ok(candidate)
    }

    /// Get the underlying email address
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the local part (before @)
    pub fn local_part(&self) -> &str {
        self.value.split('@').next().unwrap_or("")
    }

    /// Get the domain part (after @)
    pub fn domain(&self) -> &str {
        self.value.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn valid_emails_are_accepted(
            local in "[a-zA-Z0-9][a-zA-Z0-9._%+-]{0,15}",
            domain in "[a-zA-Z0-9][a-zA-Z0-9-]{0,10}",
            tld in "[a-zA-Z]{2,6}"
        ) {
            let email_str = format!("{local}@{domain}.{tld}");
            let email = Email::new(&email_str).unwrap();
            prop_assert_eq!(email.value(), email_str.as_str());
        }

        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assume!(!s.contains('@'));
            prop_assert!(Email::new(&s).is_err());
        }

        #[test]
        fn missing_tld_is_rejected(
            local in "[a-zA-Z0-9]{1,10}",
            domain in "[a-zA-Z0-9]{1,10}"
        ) {
            let email_str = format!("{local}@{domain}");
            prop_assert!(Email::new(email_str).is_err());
        }

        #[test]
        fn accepted_emails_roundtrip_through_json(
            local in "[a-z]{1,8}",
            domain in "[a-z]{1,8}\\.[a-z]{2,3}"
        ) {
            let email_str = format!("{local}@{domain}");
            if let Ok(email) = Email::new(&email_str) {
                let json = serde_json::to_string(&email).unwrap();
                let parsed: Email = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(email, parsed);
            }
        }
    }
}
