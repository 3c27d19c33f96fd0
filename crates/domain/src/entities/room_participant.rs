//! Room membership entity with read-receipt tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;

/// Role of a participant within one room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomRole {
    /// Regular participant
    Member,
    /// May moderate the room
    Admin,
    /// Created the room; at most one per room
    Owner,
}

/// A user's membership in a chat room
///
/// Tracks the participant's role and the highest message id they are known
/// to have read. The read position only moves forward: stale or duplicate
/// receipts, which are expected during concurrent delivery, are silently
/// ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomParticipant {
    lifecycle: Lifecycle,
    user_id: i64,
    room_id: i64,
    role: RoomRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_read_message_id: Option<i64>,
}

impl RoomParticipant {
    /// Create a new membership; `None` role defaults to [`RoomRole::Member`]
    pub fn create(
        user_id: i64,
        room_id: i64,
        role: Option<RoomRole>,
        last_read_message_id: Option<i64>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            user_id,
            room_id,
            role: role.unwrap_or(RoomRole::Member),
            last_read_message_id,
        }
    }

    /// Rehydrate a membership from storage
    #[allow(clippy::too_many_arguments)]
    pub const fn restore(
        id: Option<i64>,
        user_id: i64,
        room_id: i64,
        role: RoomRole,
        last_read_message_id: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            user_id,
            room_id,
            role,
            last_read_message_id,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The member
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }

    /// The room
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// The participant's role in this room
    pub const fn role(&self) -> RoomRole {
        self.role
    }

    /// The highest message id this participant has read, if any
    pub const fn last_read_message_id(&self) -> Option<i64> {
        self.last_read_message_id
    }

    /// When the membership was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the membership was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the membership is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Advance the read position to `message_id`
    ///
    /// The position is monotonically non-decreasing: the update is applied,
    /// and `updated_at` bumped, only when `message_id` is strictly greater
    /// than the current position or no position is set yet. Returns whether
    /// the position advanced; a stale or duplicate receipt is a silent
    /// no-op, not an error.
    pub fn update_read_receipt(&mut self, message_id: i64) -> bool {
        match self.last_read_message_id {
            Some(current) if message_id <= current => false,
            _ => {
                self.last_read_message_id = Some(message_id);
                self.lifecycle.touch();
                true
            },
        }
    }

    /// Change the participant's role; `None` resets to [`RoomRole::Member`]
    ///
    /// Always succeeds. Callers that want to reject an absent role must
    /// validate before calling.
    pub fn change_role(&mut self, role: Option<RoomRole>) {
        self.role = role.unwrap_or(RoomRole::Member);
        self.lifecycle.touch();
    }

    /// Mark the membership as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}
