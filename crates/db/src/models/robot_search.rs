//! Robot search (scraped docket lookup) entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `robot_searches` table: one scraped result from a court
/// website, kept as raw JSON because every source formats differently.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RobotSearch {
    pub id: DbId,
    /// `None` when the search was recorded before its process existed.
    pub process_id: Option<DbId>,
    pub docket_number: String,
    pub source: String,
    pub payload: serde_json::Value,
    pub fetched_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording a scraped search result.
#[derive(Debug, Deserialize)]
pub struct CreateRobotSearch {
    pub process_id: Option<DbId>,
    pub docket_number: String,
    pub source: String,
    pub payload: serde_json::Value,
    pub fetched_at: Timestamp,
}
