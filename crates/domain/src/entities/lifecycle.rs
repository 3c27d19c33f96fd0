//! Shared identity and lifecycle state
//!
//! Every entity embeds a [`Lifecycle`] instead of inheriting from a base
//! type: an optional persistence-assigned identity, creation/update
//! timestamps, and a soft-delete marker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity, timestamps and soft-delete state of an entity
///
/// The identity is absent until an external persistence layer assigns one.
/// Soft deletion only stamps `deleted_at`; there is no re-activation, and a
/// second `soft_delete` simply overwrites the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
}

impl Lifecycle {
    /// Fresh lifecycle for a not-yet-persisted entity
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Rehydrate lifecycle state from storage
    pub const fn restore(
        id: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// When the entity was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the entity was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// When the entity was soft-deleted, if it was
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Whether the entity is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Record a mutation by bumping the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Mark the entity as logically deleted
    pub fn soft_delete(&mut self) {
        self.deleted_at = Some(Utc::now());
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
