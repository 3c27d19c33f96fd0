//! Storage path value object

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[allow(clippy::expect_used)]
static PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9/._%+-]+$").expect("valid path pattern"));

/// A validated storage directory path
///
/// Paths are absolute directory prefixes: they start and end with `/`, never
/// contain `//` or `..`, and are limited to letters, digits and `/._%+-`.
/// Named `StoragePath` to avoid clashing with [`std::path::Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoragePath {
    value: String,
}

impl StoragePath {
    /// Create a new storage path
    ///
    /// # Errors
    ///
    /// Returns an error naming the first violated rule: blank, length
    /// outside 2..=200, disallowed characters, missing leading or trailing
    /// slash, consecutive slashes, or a parent-directory component.
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let value = path.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Path cannot be blank"));
        }

        let length = value.chars().count();
        if !(2..=200).contains(&length) {
            return Err(DomainError::validation(
                "Path must be between 2 and 200 characters",
            ));
        }

        if !PATH_PATTERN.is_match(&value) {
            return Err(DomainError::validation(
                "Path must contain only letters, numbers, and special characters",
            ));
        }

        if !value.starts_with('/') {
            return Err(DomainError::validation("Path must start with a slash"));
        }

        if !value.ends_with('/') {
            return Err(DomainError::validation("Path must end with a slash"));
        }

        if value.contains("//") {
            return Err(DomainError::validation(
                "Path cannot contain consecutive slashes",
            ));
        }

        if value.contains("..") {
            return Err(DomainError::validation(
                "Path cannot contain parent directory",
            ));
        }

        Ok(Self { value })
    }

    /// Get the underlying path
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this path lies under the given directory prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for StoragePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StoragePath {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
