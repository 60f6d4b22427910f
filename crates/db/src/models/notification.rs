//! Notification entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table: a message surfaced to one user,
/// typically a calendar reminder. Notifications are read-and-swept, not
/// soft-deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Source calendar event for reminders; `None` for ad-hoc messages.
    pub event_id: Option<DbId>,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub event_id: Option<DbId>,
    pub title: String,
    pub message: String,
}
