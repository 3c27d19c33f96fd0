//! User display name value object
//!
//! # Examples
//!
//! ```
//! use domain::UserName;
//!
//! let name = UserName::new("홍길동").unwrap();
//! assert_eq!(name.value(), "홍길동");
//!
//! assert!(UserName::new("홍").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated user display name
///
/// Length is measured in Unicode code points, so multi-byte text counts one
/// per character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct UserName {
    #[validate(length(min = 2, max = 20))]
    value: String,
}

impl UserName {
    /// Create a new user name
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or not between 2 and 20
    /// characters long.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Username cannot be blank"));
        }

        let candidate = Self { value };
        candidate.validate().map_err(|_| {
            DomainError::validation("Username must be between 2 and 20 characters")
        })?;

        Ok(candidate)
    }

    /// Get the underlying name
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_accepted() {
        let name = UserName::new("홍길동").unwrap();
        assert_eq!(name.value(), "홍길동");
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        assert!(UserName::new("ab").is_ok());
        assert!(UserName::new("a".repeat(20)).is_ok());
        assert!(UserName::new("가나").is_ok());
        assert!(UserName::new("가".repeat(20)).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            UserName::new("").unwrap_err(),
            DomainError::validation("Username cannot be blank")
        );
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn too_short_name_is_rejected() {
        assert_eq!(
            UserName::new("홍").unwrap_err(),
            DomainError::validation("Username must be between 2 and 20 characters")
        );
    }

    #[test]
    fn too_long_name_is_rejected() {
        assert!(UserName::new("a".repeat(21)).is_err());
        assert!(UserName::new("가".repeat(21)).is_err());
    }

    #[test]
    fn length_counts_code_points_not_bytes() {
        // 20 Korean characters span 60 UTF-8 bytes but are within bounds
        let name = "한".repeat(20);
        assert!(UserName::new(name).is_ok());
    }

    #[test]
    fn serialization_is_transparent() {
        let name = UserName::new("홍길동").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"홍길동\"");
    }
}
