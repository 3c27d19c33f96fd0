//! Chat room entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;
use crate::{errors::DomainError, value_objects::RoomName};

/// Kind of chat room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// One-to-one conversation
    Direct,
    /// Multi-member room
    Group,
}

/// A chat room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRoom {
    lifecycle: Lifecycle,
    room_name: RoomName,
    room_type: RoomType,
    created_by: i64,
}

impl ChatRoom {
    /// Create a new chat room, validating the raw name
    ///
    /// # Errors
    ///
    /// Returns an error if the name fails [`RoomName`] validation.
    pub fn create(
        room_name: &str,
        room_type: RoomType,
        created_by: i64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            lifecycle: Lifecycle::new(),
            room_name: RoomName::new(room_name)?,
            room_type,
            created_by,
        })
    }

    /// Rehydrate a chat room from storage
    pub const fn restore(
        id: Option<i64>,
        room_name: RoomName,
        room_type: RoomType,
        created_by: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            room_name,
            room_type,
            created_by,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The room name
    pub fn room_name(&self) -> &str {
        self.room_name.value()
    }

    /// The kind of room
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// The user who created the room
    pub const fn created_by(&self) -> i64 {
        self.created_by
    }

    /// When the room was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the room was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the room is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Replace the room name, validating the raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the name fails [`RoomName`] validation; the
    /// current name is kept.
    pub fn change_room_name(&mut self, room_name: &str) -> Result<(), DomainError> {
        self.room_name = RoomName::new(room_name)?;
        self.lifecycle.touch();
        Ok(())
    }

    /// Transfer room ownership
    pub fn change_created_by(&mut self, created_by: i64) {
        self.created_by = created_by;
        self.lifecycle.touch();
    }

    /// Mark the room as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}
