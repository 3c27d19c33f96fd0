//! File name value object

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[allow(clippy::expect_used)]
static FILE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+$").expect("valid file name pattern"));

/// A validated file name (original or stored)
///
/// Restricted to letters, digits and `._%+-`; whitespace and path
/// separators are rejected so a name can never escape its storage
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName {
    value: String,
}

impl FileName {
    /// Create a new file name
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank, not between 2 and 100
    /// characters long, or contains characters outside the allowed set.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("File name cannot be blank"));
        }

        let length = value.chars().count();
        if !(2..=100).contains(&length) {
            return Err(DomainError::validation(
                "File name must be between 2 and 100 characters",
            ));
        }

        if !FILE_NAME_PATTERN.is_match(&value) {
            return Err(DomainError::validation(
                "File name must contain only letters, numbers, and special characters",
            ));
        }

        Ok(Self { value })
    }

    /// Get the underlying file name
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for FileName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FileName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
