//! Profile image URL value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated profile image URL
///
/// Only the scheme is checked; anything reachable over `http(s)` is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileImageUrl {
    value: String,
}

impl ProfileImageUrl {
    /// Create a new profile image URL
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or does not start with
    /// `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        let value = url.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "Profile image URL cannot be blank",
            ));
        }
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(DomainError::validation(
                "Invalid profile image URL format",
            ));
        }

        Ok(Self { value })
    }

    /// Get the underlying URL
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ProfileImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ProfileImageUrl {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProfileImageUrl {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
