//! Storage backend discriminator

use serde::{Deserialize, Serialize};

/// Where a stored file physically lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// On the application host's filesystem
    Local,
    /// In an S3-compatible object store
    S3,
    /// Served from a CDN origin
    Cdn,
    /// In the temporary staging area, pending promotion
    Temp,
    /// Referenced from an external system, not managed here
    External,
}

impl StorageType {
    /// Check if this is host-local storage
    pub const fn is_local(self) -> bool {
        matches!(self, Self::Local)
    }

    /// Check if this denotes a remote location
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::S3 | Self::Cdn | Self::External)
    }

    /// Check if this is the temporary staging area
    pub const fn is_temp(self) -> bool {
        matches!(self, Self::Temp)
    }
}
