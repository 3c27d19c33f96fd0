//! Chat message entity
//!
//! The mention list is entity-owned: it is copied from the caller on every
//! write and copied back out on every read, so no external handle can reach
//! the entity's internal state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;

/// Kind of message payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Plain text
    Text,
    /// Image attachment
    Image,
    /// File attachment
    File,
    /// Reply to another message
    Reply,
    /// Server-generated notice
    System,
}

/// A message posted to a chat room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    lifecycle: Lifecycle,
    room_id: i64,
    user_id: i64,
    content: String,
    message_type: MessageType,
    mentions: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_message_id: Option<i64>,
}

impl Message {
    /// Create a new message
    ///
    /// A `None` message type defaults to [`MessageType::Text`]; `None`
    /// mentions become an empty list. The mention slice is copied, so later
    /// changes to the caller's list do not affect the message.
    pub fn create(
        room_id: i64,
        user_id: i64,
        content: impl Into<String>,
        message_type: Option<MessageType>,
        mentions: Option<&[i64]>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            room_id,
            user_id,
            content: content.into(),
            message_type: message_type.unwrap_or(MessageType::Text),
            mentions: mentions.map(<[i64]>::to_vec).unwrap_or_default(),
            parent_message_id: None,
        }
    }

    /// Attach a parent message, turning this into a threaded reply
    #[must_use]
    pub const fn with_parent(mut self, parent_message_id: i64) -> Self {
        self.parent_message_id = Some(parent_message_id);
        self
    }

    /// Rehydrate a message from storage
    #[allow(clippy::too_many_arguments)]
    pub const fn restore(
        id: Option<i64>,
        room_id: i64,
        user_id: i64,
        content: String,
        message_type: MessageType,
        mentions: Vec<i64>,
        parent_message_id: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            room_id,
            user_id,
            content,
            message_type,
            mentions,
            parent_message_id,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The room this message was posted to
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// The author
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// The message body
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The payload kind
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// The mentioned user ids, as an independent copy
    pub fn mentions(&self) -> Vec<i64> {
        self.mentions.clone()
    }

    /// The parent message id for threaded replies
    pub const fn parent_message_id(&self) -> Option<i64> {
        self.parent_message_id
    }

    /// When the message was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the message was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the message is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Replace the message body
    pub fn change_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.lifecycle.touch();
    }

    /// Replace the payload kind; `None` resets to [`MessageType::Text`]
    pub fn change_message_type(&mut self, message_type: Option<MessageType>) {
        self.message_type = message_type.unwrap_or(MessageType::Text);
        self.lifecycle.touch();
    }

    /// Replace the mention list; `None` clears it. The slice is copied.
    pub fn change_mentions(&mut self, mentions: Option<&[i64]>) {
        self.mentions = mentions.map(<[i64]>::to_vec).unwrap_or_default();
        self.lifecycle.touch();
    }

    /// Mark the message as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_message_exposes_attributes() {
        let message = Message::create(
            1,
            100,
            "안녕하세요",
            Some(MessageType::Text),
            Some(&[200, 300]),
        );

        assert_eq!(message.room_id(), 1);
        assert_eq!(message.user_id(), 100);
        assert_eq!(message.content(), "안녕하세요");
        assert_eq!(message.message_type(), MessageType::Text);
        assert_eq!(message.mentions(), vec![200, 300]);
        assert!(message.parent_message_id().is_none());
        assert!(message.id().is_none());
    }

    #[test]
    fn message_type_defaults_to_text() {
        let message = Message::create(1, 100, "hi", None, None);
        assert_eq!(message.message_type(), MessageType::Text);
    }

    #[test]
    fn missing_mentions_become_empty_list() {
        let message = Message::create(1, 100, "hi", None, None);
        assert!(message.mentions().is_empty());
    }

    #[test]
    fn caller_list_mutation_does_not_affect_message() {
        let mut caller_mentions = vec![200, 300];
        let message = Message::create(1, 100, "hi", None, Some(&caller_mentions));

        caller_mentions.push(400);

        assert_eq!(message.mentions(), vec![200, 300]);
    }

    #[test]
    fn returned_list_mutation_does_not_affect_message() {
        let message = Message::create(1, 100, "hi", None, Some(&[200, 300]));

        let mut returned = message.mentions();
        returned.push(400);

        assert_eq!(message.mentions(), vec![200, 300]);
    }

    #[test]
    fn with_parent_sets_parent_message_id() {
        let message =
            Message::create(1, 100, "답글입니다", Some(MessageType::Reply), None).with_parent(999);
        assert_eq!(message.parent_message_id(), Some(999));
    }

    #[test]
    fn change_content_replaces_and_touches() {
        let mut message = Message::create(1, 100, "first", None, None);
        let before = message.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(10));

        message.change_content("second");

        assert_eq!(message.content(), "second");
        assert!(message.updated_at() > before);
    }

    #[test]
    fn change_message_type_none_resets_to_text() {
        let mut message = Message::create(1, 100, "hi", Some(MessageType::Image), None);
        message.change_message_type(None);
        assert_eq!(message.message_type(), MessageType::Text);
    }

    #[test]
    fn change_message_type_keeps_last_value() {
        let mut message = Message::create(1, 100, "hi", None, None);
        message.change_message_type(Some(MessageType::File));
        message.change_message_type(Some(MessageType::Image));
        assert_eq!(message.message_type(), MessageType::Image);
    }

    #[test]
    fn change_mentions_replaces_list() {
        let mut message = Message::create(1, 100, "hi", None, None);
        message.change_mentions(Some(&[200]));
        message.change_mentions(Some(&[300, 400]));
        assert_eq!(message.mentions(), vec![300, 400]);
    }

    #[test]
    fn change_mentions_none_clears_list() {
        let mut message = Message::create(1, 100, "hi", None, Some(&[200, 300]));
        message.change_mentions(None);
        assert!(message.mentions().is_empty());
    }

    #[test]
    fn change_mentions_copies_caller_list() {
        let mut message = Message::create(1, 100, "hi", None, None);
        let mut caller_mentions = vec![200, 300];

        message.change_mentions(Some(&caller_mentions));
        caller_mentions.push(400);

        assert_eq!(message.mentions(), vec![200, 300]);
    }

    #[test]
    fn soft_delete_marks_deleted() {
        let mut message = Message::create(1, 100, "hi", None, None);
        message.soft_delete();
        assert!(message.is_deleted());
    }
}
