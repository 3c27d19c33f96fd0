//! Value Objects - Immutable, identity-less domain primitives

mod content_type;
mod email;
mod file_metadata;
mod file_name;
mod file_security;
mod file_size;
mod profile_image_url;
mod room_name;
mod storage_path;
mod storage_type;
mod user_name;

pub use content_type::ContentType;
pub use email::Email;
pub use file_metadata::FileMetadata;
pub use file_name::FileName;
pub use file_security::{
    DownloadPolicy, Encryption, FileSecurity, ScanStatus, SharePolicy, Visibility,
};
pub use file_size::FileSize;
pub use profile_image_url::ProfileImageUrl;
pub use room_name::RoomName;
pub use storage_path::StoragePath;
pub use storage_type::StorageType;
pub use user_name::UserName;
