//! File security policy object
//!
//! Bundles the access-control attributes of a stored file and rejects
//! combinations that would let a dangerous or public file be handled
//! inconsistently.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Who may see a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only the uploader and room participants
    Private,
    /// Anyone with the link
    Public,
}

/// Whether a file may be downloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadPolicy {
    /// Downloads permitted
    Allowed,
    /// Downloads blocked
    Disabled,
}

/// How a file may be shared onward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharePolicy {
    /// No onward sharing
    Disabled,
    /// Recipients may view but not re-share
    ReadOnly,
    /// Recipients may re-share freely
    Full,
}

/// Outcome of the malware scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Scan not yet completed
    Pending,
    /// Scan completed, nothing found
    Clean,
    /// Scan flagged the file
    Malicious,
}

/// Encryption applied to the stored bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encryption {
    /// Stored as-is
    None,
    /// Encrypted at rest
    AtRest,
}

/// Immutable security policy for a stored file
///
/// Cross-field invariants, checked at construction:
/// - a `Malicious` scan forbids downloads and any non-disabled sharing;
/// - `Public` visibility requires downloads to be allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileSecurity {
    visibility: Visibility,
    download_policy: DownloadPolicy,
    share_policy: SharePolicy,
    scan_status: ScanStatus,
    encryption: Encryption,
}

impl FileSecurity {
    /// Compose a security policy, enforcing the cross-field rules
    ///
    /// # Errors
    ///
    /// Returns a policy conflict if the combination violates a rule.
    pub fn new(
        visibility: Visibility,
        download_policy: DownloadPolicy,
        share_policy: SharePolicy,
        scan_status: ScanStatus,
        encryption: Encryption,
    ) -> Result<Self, DomainError> {
        if scan_status == ScanStatus::Malicious
            && (download_policy == DownloadPolicy::Allowed
                || share_policy != SharePolicy::Disabled)
        {
            return Err(DomainError::policy(
                "Malicious file cannot be downloadable or shareable",
            ));
        }

        if visibility == Visibility::Public && download_policy == DownloadPolicy::Disabled {
            return Err(DomainError::policy("Public file must be downloadable"));
        }

        Ok(Self {
            visibility,
            download_policy,
            share_policy,
            scan_status,
            encryption,
        })
    }

    /// Default policy for a freshly uploaded private file: scan still
    /// pending, downloads allowed, no onward sharing
    pub fn default_private() -> Self {
        Self {
            visibility: Visibility::Private,
            download_policy: DownloadPolicy::Allowed,
            share_policy: SharePolicy::Disabled,
            scan_status: ScanStatus::Pending,
            encryption: Encryption::None,
        }
    }

    /// Preset for a publicly readable file: scanned clean, read-only
    /// sharing
    pub fn public_readable() -> Self {
        Self {
            visibility: Visibility::Public,
            download_policy: DownloadPolicy::Allowed,
            share_policy: SharePolicy::ReadOnly,
            scan_status: ScanStatus::Clean,
            encryption: Encryption::None,
        }
    }

    /// Who may see the file
    pub const fn visibility(self) -> Visibility {
        self.visibility
    }

    /// Whether the file may be downloaded
    pub const fn download_policy(self) -> DownloadPolicy {
        self.download_policy
    }

    /// How the file may be shared onward
    pub const fn share_policy(self) -> SharePolicy {
        self.share_policy
    }

    /// Malware scan outcome
    pub const fn scan_status(self) -> ScanStatus {
        self.scan_status
    }

    /// Encryption applied to the stored bytes
    pub const fn encryption(self) -> Encryption {
        self.encryption
    }
}
