//! Domain entities - Objects with identity and lifecycle

mod chat_room;
mod file_attachment;
mod lifecycle;
mod message;
mod message_reply;
mod room_participant;
mod user;

pub use chat_room::{ChatRoom, RoomType};
pub use file_attachment::{FileAttachment, FileType};
pub use lifecycle::Lifecycle;
pub use message::{Message, MessageType};
pub use message_reply::MessageReply;
pub use room_participant::{RoomParticipant, RoomRole};
pub use user::{User, UserRole};
