//! Document entity model and DTOs.

use causa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `documents` table. The file itself lives in the
/// client-keyed document store; `stored_path` is relative to the store
/// root.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub process_id: DbId,
    pub title: String,
    pub original_filename: String,
    pub stored_path: String,
    pub content_hash: String,
    pub size_bytes: i64,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a document row after its file has been copied into
/// the store.
#[derive(Debug, Deserialize)]
pub struct CreateDocument {
    pub process_id: DbId,
    pub title: String,
    pub original_filename: String,
    pub stored_path: String,
    pub content_hash: String,
    pub size_bytes: i64,
}

/// DTO for updating a document. Only the title is editable; the stored
/// file is immutable once attached.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
}
