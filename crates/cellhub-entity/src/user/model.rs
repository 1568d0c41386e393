//! Identity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered identity, as stored in the external `users` table.
///
/// The auth provider owns the credentials; this row carries the profile
/// and role attributes the application reads per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier (matches the auth provider's user id).
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub full_name: String,
    /// Ministry role. Unknown values deserialize to [`Role::Unknown`].
    pub role: Role,
    /// When the identity row was created.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Check if this identity has administrator privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Row payload for inserting a new identity after sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIdentity {
    /// The auth provider's user id for the new account.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: Role,
}
