//! Calendar event entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table: a hearing, deadline, or appointment
/// booked against a process.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub process_id: DbId,
    pub title: String,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    /// Reminder lead-time in minutes before `starts_at`; `None` disables
    /// the reminder.
    pub reminder_minutes: Option<i64>,
    pub notes: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a calendar event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub process_id: DbId,
    pub title: String,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    pub reminder_minutes: Option<i64>,
    pub notes: Option<String>,
}

/// DTO for updating a calendar event.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub location: Option<String>,
    pub reminder_minutes: Option<i64>,
    pub notes: Option<String>,
}
