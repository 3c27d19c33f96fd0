//! Message reply association entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;
use crate::errors::DomainError;

/// Links a reply message to the message it answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageReply {
    lifecycle: Lifecycle,
    message_id: i64,
    parent_message_id: i64,
}

impl MessageReply {
    /// Create a new reply link
    ///
    /// # Errors
    ///
    /// Returns an error if a message would reply to itself.
    pub fn create(message_id: i64, parent_message_id: i64) -> Result<Self, DomainError> {
        if message_id == parent_message_id {
            return Err(DomainError::validation(
                "Message ID and parent message ID cannot be the same",
            ));
        }

        Ok(Self {
            lifecycle: Lifecycle::new(),
            message_id,
            parent_message_id,
        })
    }

    /// Rehydrate a reply link from storage
    pub const fn restore(
        id: Option<i64>,
        message_id: i64,
        parent_message_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            message_id,
            parent_message_id,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The replying message
    pub const fn message_id(&self) -> i64 {
        self.message_id
    }

    /// The message being answered
    pub const fn parent_message_id(&self) -> i64 {
        self.parent_message_id
    }

    /// When the link was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the link was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the link is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Mark the link as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_ids_create_a_link() {
        let reply = MessageReply::create(100, 200).unwrap();
        assert_eq!(reply.message_id(), 100);
        assert_eq!(reply.parent_message_id(), 200);
        assert!(reply.id().is_none());
        assert!(!reply.is_deleted());
    }

    #[test]
    fn self_reply_is_rejected() {
        assert_eq!(
            MessageReply::create(100, 100).unwrap_err(),
            DomainError::validation("Message ID and parent message ID cannot be the same")
        );
    }

    #[test]
    fn soft_delete_marks_deleted() {
        let mut reply = MessageReply::create(100, 200).unwrap();
        reply.soft_delete();
        assert!(reply.is_deleted());
    }
}
