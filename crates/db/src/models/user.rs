//! User entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the Argon2 password hash -- never serialize this struct
/// outward; the logic layer exposes only what a widget needs.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    /// Users are never soft-deleted by timestamp; deactivation is their
    /// lifecycle flag.
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The password arrives already hashed; the
/// logic layer owns the hashing.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
}

/// DTO for updating an existing user.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub is_active: Option<bool>,
}

/// Safe user representation for display (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            full_name: u.full_name,
            is_active: u.is_active,
        }
    }
}
