//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lifecycle;
use crate::value_objects::{Email, ProfileImageUrl, UserName};

/// Authorization role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular account
    User,
    /// Administrative account
    Admin,
}

impl UserRole {
    /// Check if this role carries administrative rights
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A registered chat user
///
/// The password is held as an opaque string; hashing is the account
/// service's responsibility. The role is never unset after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    lifecycle: Lifecycle,
    email: Email,
    password: String,
    name: UserName,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<ProfileImageUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_message: Option<String>,
    role: UserRole,
}

impl User {
    /// Create a new user with the default role
    pub fn create(email: Email, password: impl Into<String>, name: UserName) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            email,
            password: password.into(),
            name,
            profile_image_url: None,
            status_message: None,
            role: UserRole::User,
        }
    }

    /// Set the role at creation; `None` keeps the default
    #[must_use]
    pub fn with_role(mut self, role: Option<UserRole>) -> Self {
        self.role = role.unwrap_or(UserRole::User);
        self
    }

    /// Set the profile image at creation
    #[must_use]
    pub fn with_profile_image_url(mut self, url: ProfileImageUrl) -> Self {
        self.profile_image_url = Some(url);
        self
    }

    /// Set the status message at creation
    #[must_use]
    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }

    /// Rehydrate a user from storage
    #[allow(clippy::too_many_arguments)]
    pub const fn restore(
        id: Option<i64>,
        email: Email,
        password: String,
        name: UserName,
        profile_image_url: Option<ProfileImageUrl>,
        status_message: Option<String>,
        role: UserRole,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::restore(id, created_at, updated_at, deleted_at),
            email,
            password,
            name,
            profile_image_url,
            status_message,
            role,
        }
    }

    /// The persistence-assigned identity, if any
    pub const fn id(&self) -> Option<i64> {
        self.lifecycle.id()
    }

    /// The validated email address
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// The opaque password value
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The display name
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// The profile image URL, if set
    pub const fn profile_image_url(&self) -> Option<&ProfileImageUrl> {
        self.profile_image_url.as_ref()
    }

    /// The status message, if set
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The account role
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// When the user was created
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle.created_at()
    }

    /// When the user was last mutated
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle.updated_at()
    }

    /// Whether the user is logically deleted
    pub const fn is_deleted(&self) -> bool {
        self.lifecycle.is_deleted()
    }

    /// Replace the display name
    pub fn change_name(&mut self, name: UserName) {
        self.name = name;
        self.lifecycle.touch();
    }

    /// Replace the profile image URL
    pub fn change_profile_image_url(&mut self, url: ProfileImageUrl) {
        self.profile_image_url = Some(url);
        self.lifecycle.touch();
    }

    /// Replace the status message
    pub fn change_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.lifecycle.touch();
    }

    /// Mark the user as logically deleted
    pub fn soft_delete(&mut self) {
        self.lifecycle.soft_delete();
    }
}
