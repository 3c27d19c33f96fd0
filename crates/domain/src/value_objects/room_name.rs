//! Chat room name value object

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated chat room name (2 to 20 code points)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct RoomName {
    #[validate(length(min = 2, max = 20))]
    value: String,
}

impl RoomName {
    /// Create a new room name
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or not between 2 and 20
    /// characters long.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Room name cannot be blank"));
        }

        let candidate = Self { value };
        candidate.validate().map_err(|_| {
            DomainError::validation("Room name must be between 2 and 20 characters")
        })?;

        Ok(candidate)
    }

    /// Get the underlying name
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for RoomName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RoomName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
