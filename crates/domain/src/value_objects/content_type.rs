//! MIME content type value object

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[allow(clippy::expect_used)]
static MIME_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+/[a-z0-9.+-]+$").expect("valid MIME pattern"));

/// MIME types that may never be attached, regardless of scan status
const BLOCKED_TYPES: [&str; 4] = [
    "application/octet-stream",
    "application/x-msdownload",
    "application/x-sh",
    "application/java-archive",
];

/// A validated, normalized MIME content type
///
/// Input is trimmed and lowercased before validation, so
/// `ContentType::new("IMAGE/PNG")` and `ContentType::new("image/png")`
/// produce equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType {
    value: String,
}

impl ContentType {
    /// Create a new content type, normalizing before validation
    ///
    /// # Errors
    ///
    /// Returns an error if the normalized value is blank, not a
    /// `type/subtype` MIME string, or on the blocked-type list.
    pub fn new(content_type: impl Into<String>) -> Result<Self, DomainError> {
        let value = content_type.into().trim().to_lowercase();

        if value.is_empty() {
            return Err(DomainError::validation("Content type cannot be blank"));
        }

        if !MIME_TYPE_PATTERN.is_match(&value) {
            return Err(DomainError::validation(format!(
                "Invalid MIME type format: {value}"
            )));
        }

        if BLOCKED_TYPES.contains(&value.as_str()) {
            return Err(DomainError::validation(format!(
                "Blocked content type: {value}"
            )));
        }

        Ok(Self { value })
    }

    /// Get the normalized MIME string
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The primary type, e.g. `image` for `image/png`
    pub fn primary_type(&self) -> &str {
        self.value.split('/').next().unwrap_or("")
    }

    /// The subtype, e.g. `png` for `image/png`
    pub fn subtype(&self) -> &str {
        self.value.split('/').nth(1).unwrap_or("")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ContentType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContentType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
