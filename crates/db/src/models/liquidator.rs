//! Liquidator (external calculator tool) entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `liquidators` table: an external tool registered by path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Liquidator {
    pub id: DbId,
    pub name: String,
    pub executable_path: String,
    /// Runtime kind: `"binary"`, `"shell"`, or `"python"`.
    pub kind: String,
    pub description: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a liquidator.
#[derive(Debug, Deserialize)]
pub struct CreateLiquidator {
    pub name: String,
    pub executable_path: String,
    pub kind: String,
    pub description: Option<String>,
}

/// DTO for updating a registered liquidator.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLiquidator {
    pub name: Option<String>,
    pub executable_path: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
}
