//! File size value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated file size in bytes
///
/// Bounded by a global maximum of 500 MiB, inclusive. Negative sizes are
/// unrepresentable here; callers holding signed storage values go through
/// [`FileSize::from_signed`], which keeps the rejection observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSize {
    value: u64,
}

impl FileSize {
    /// Upper bound for any stored file: 500 MiB
    pub const GLOBAL_MAX: u64 = 500 * 1024 * 1024;

    /// Create a new file size
    ///
    /// # Errors
    ///
    /// Returns an error if the size exceeds [`Self::GLOBAL_MAX`].
    pub fn new(bytes: u64) -> Result<Self, DomainError> {
        if bytes > Self::GLOBAL_MAX {
            return Err(DomainError::validation(format!(
                "File size cannot be greater than {} bytes",
                Self::GLOBAL_MAX
            )));
        }

        Ok(Self { value: bytes })
    }

    /// Create a file size from a signed byte count
    ///
    /// # Errors
    ///
    /// Returns an error if the count is negative or exceeds
    /// [`Self::GLOBAL_MAX`].
    pub fn from_signed(bytes: i64) -> Result<Self, DomainError> {
        let unsigned = u64::try_from(bytes)
            .map_err(|_| DomainError::validation("File size cannot be negative"))?;
        Self::new(unsigned)
    }

    /// Get the size in bytes
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<u64> for FileSize {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for FileSize {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn sizes_within_bound_are_accepted(bytes in 0u64..=FileSize::GLOBAL_MAX) {
            let size = FileSize::new(bytes).unwrap();
            prop_assert_eq!(size.value(), bytes);
        }

        #[test]
        fn sizes_over_bound_are_rejected(bytes in FileSize::GLOBAL_MAX + 1..u64::MAX) {
            prop_assert!(FileSize::new(bytes).is_err());
        }

        #[test]
        fn negative_signed_sizes_are_rejected(bytes in i64::MIN..0i64) {
            prop_assert!(FileSize::from_signed(bytes).is_err());
        }
    }
}
