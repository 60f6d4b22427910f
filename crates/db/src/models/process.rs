//! Process (legal case) entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `processes` table. A process belongs to exactly one
/// client and owns its documents, accounting entries, events, and
/// actuaciones.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Process {
    pub id: DbId,
    pub client_id: DbId,
    /// Court file number; unique among active and trashed processes.
    pub docket_number: String,
    pub court: Option<String>,
    pub process_type: Option<String>,
    pub opposing_party: Option<String>,
    pub description: Option<String>,
    pub started_on: Option<NaiveDate>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new process.
#[derive(Debug, Deserialize)]
pub struct CreateProcess {
    pub client_id: DbId,
    pub docket_number: String,
    pub court: Option<String>,
    pub process_type: Option<String>,
    pub opposing_party: Option<String>,
    pub description: Option<String>,
    pub started_on: Option<NaiveDate>,
}

/// DTO for updating an existing process. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProcess {
    pub docket_number: Option<String>,
    pub court: Option<String>,
    pub process_type: Option<String>,
    pub opposing_party: Option<String>,
    pub description: Option<String>,
    pub started_on: Option<NaiveDate>,
}
