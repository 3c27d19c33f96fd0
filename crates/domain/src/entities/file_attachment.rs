//! File attachment entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;
use crate::value_objects::{FileMetadata, FileSecurity};

/// Broad category of an attached file, used for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Audio clip
    Audio,
    /// Document (pdf, office, text)
    Document,
    /// Anything else
    Other,
}

/// A file attached to a message
///
/// Composes the descriptive [`FileMetadata`] and the [`FileSecurity`]
/// policy, both validated at their own construction. Aside from the
/// soft-delete lifecycle the attachment is immutable: replacing metadata or
/// security means uploading a new attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAttachment {
    lifecycle: Lifecycle,
    message_id: i64,
    uploader_id: i64,
    metadata: FileMetadata,
    file_type: FileType,
    security: FileSecurity,
}

impl FileAttachment {
    /// Create a new attachment
    pub fn create(
        message_id: i64,
        uploader_id: i64,
        metadata: FileMetadata,
        file_type: FileType,
        security: FileSecurity,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            message_id,
            uploader_id,
            metadata,
            file_type,
            security,
        }
    }

    /// Rehydrate an attachment from storage
    #[allow(clippy::too_many_arguments)]
    pub const fn restore(
        id: Option<i64>,
        message_id: i64,
        uploader_id: i64,
        metadata: FileMetadata,
        file_type: FileType,
        security: FileSecurity,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            message_id,
            uploader_id,
            metadata,
            file_type,
            security,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The message this file is attached to
    pub const fn message_id(&self) -> i64 {
        self.message_id
    }

    /// The user who uploaded the file
    pub const fn uploader_id(&self) -> i64 {
        self.uploader_id
    }

    /// The descriptive metadata
    pub const fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// The file category
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The security policy
    pub const fn security(&self) -> FileSecurity {
        self.security
    }

    /// When the attachment was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the attachment was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the attachment is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Mark the attachment as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{
        ContentType, FileName, FileSize, StoragePath, StorageType, Visibility,
    };

    fn sample_metadata() -> FileMetadata {
        FileMetadata::new(
            FileName::new("original.pdf").unwrap(),
            FileName::new("stored-uuid.pdf").unwrap(),
            ContentType::new("application/pdf").unwrap(),
            FileSize::new(1024).unwrap(),
            StoragePath::new("/uploads/files/").unwrap(),
            StorageType::Local,
        )
        .unwrap()
    }

    #[test]
    fn created_attachment_exposes_attributes() {
        let metadata = sample_metadata();
        let attachment = FileAttachment::create(
            1,
            100,
            metadata.clone(),
            FileType::Document,
            FileSecurity::default_private(),
        );

        assert_eq!(attachment.message_id(), 1);
        assert_eq!(attachment.uploader_id(), 100);
        assert_eq!(attachment.metadata(), &metadata);
        assert_eq!(attachment.file_type(), FileType::Document);
        assert_eq!(attachment.security(), FileSecurity::default_private());
        assert!(attachment.id().is_none());
        assert!(!attachment.is_deleted());
    }

    #[test]
    fn all_file_types_are_accepted() {
        for file_type in [
            FileType::Image,
            FileType::Video,
            FileType::Audio,
            FileType::Document,
            FileType::Other,
        ] {
            let attachment = FileAttachment::create(
                1,
                100,
                sample_metadata(),
                file_type,
                FileSecurity::default_private(),
            );
            assert_eq!(attachment.file_type(), file_type);
        }
    }

    #[test]
    fn security_presets_are_carried() {
        let private = FileAttachment::create(
            1,
            100,
            sample_metadata(),
            FileType::Document,
            FileSecurity::default_private(),
        );
        assert_eq!(private.security().visibility(), Visibility::Private);

        let public = FileAttachment::create(
            1,
            100,
            sample_metadata(),
            FileType::Document,
            FileSecurity::public_readable(),
        );
        assert_eq!(public.security().visibility(), Visibility::Public);
    }

    #[test]
    fn metadata_details_are_reachable() {
        let attachment = FileAttachment::create(
            1,
            100,
            sample_metadata(),
            FileType::Image,
            FileSecurity::default_private(),
        );
        assert_eq!(
            attachment.metadata().content_type().value(),
            "application/pdf"
        );
    }

    #[test]
    fn soft_delete_marks_deleted() {
        let mut attachment = FileAttachment::create(
            1,
            100,
            sample_metadata(),
            FileType::Document,
            FileSecurity::default_private(),
        );

        attachment.soft_delete();

        assert!(attachment.is_deleted());
    }
}
