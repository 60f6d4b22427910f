//! Actuación (case action) entity model and DTOs.
//!
//! An actuación is a dated procedural action logged against a process:
//! a filing, a ruling, a notification served, and so on.

use causa_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actuaciones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actuacion {
    pub id: DbId,
    pub process_id: DbId,
    pub action_date: NaiveDate,
    pub title: String,
    pub detail: Option<String>,
    /// User who logged the action, when known.
    pub recorded_by: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for logging a new actuación.
#[derive(Debug, Deserialize)]
pub struct CreateActuacion {
    pub process_id: DbId,
    pub action_date: NaiveDate,
    pub title: String,
    pub detail: Option<String>,
    pub recorded_by: Option<DbId>,
}

/// DTO for correcting an actuación.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateActuacion {
    pub action_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub detail: Option<String>,
}
