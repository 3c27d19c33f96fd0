//! File metadata policy object
//!
//! Couples the descriptive attributes of a stored file and enforces the
//! rules that tie the storage path to the storage backend. A
//! [`FileMetadata`] either exists in a fully consistent state or was never
//! constructed.

use serde::{Deserialize, Serialize};

use super::{ContentType, FileName, FileSize, StoragePath, StorageType};
use crate::errors::DomainError;

/// Directory every temporary-storage file must live under
const TEMP_PATH_PREFIX: &str = "/system/tmp/";

/// Directory prefix that marks an object-storage location
const REMOTE_PATH_PREFIX: &str = "/s3/";

/// Immutable descriptive metadata for a stored file
///
/// Cross-field invariants, checked at construction:
/// - `Temp` storage requires a path under the temporary prefix.
/// - `Local` storage must not point at a remote object-storage path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileMetadata {
    original_file_name: FileName,
    stored_file_name: FileName,
    content_type: ContentType,
    file_size: FileSize,
    storage_path: StoragePath,
    storage_type: StorageType,
}

impl FileMetadata {
    /// Compose file metadata, enforcing path/storage-type coupling
    ///
    /// # Errors
    ///
    /// Returns a policy conflict if the storage type and path disagree.
    pub fn new(
        original_file_name: FileName,
        stored_file_name: FileName,
        content_type: ContentType,
        file_size: FileSize,
        storage_path: StoragePath,
        storage_type: StorageType,
    ) -> Result<Self, DomainError> {
        if storage_type.is_temp() && !storage_path.starts_with(TEMP_PATH_PREFIX) {
            return Err(DomainError::policy("TEMP storage must use the temporary path"));
        }

        if storage_type.is_local() && storage_path.starts_with(REMOTE_PATH_PREFIX) {
            return Err(DomainError::policy("LOCAL storage cannot use a remote path"));
        }

        Ok(Self {
            original_file_name,
            stored_file_name,
            content_type,
            file_size,
            storage_path,
            storage_type,
        })
    }

    /// The file name as uploaded
    pub fn original_file_name(&self) -> &FileName {
        &self.original_file_name
    }

    /// The name the file is stored under
    pub fn stored_file_name(&self) -> &FileName {
        &self.stored_file_name
    }

    /// The normalized MIME type
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// The size in bytes
    pub fn file_size(&self) -> FileSize {
        self.file_size
    }

    /// The directory the file lives in
    pub fn storage_path(&self) -> &StoragePath {
        &self.storage_path
    }

    /// The storage backend
    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }
}
