//! Repository for the `documents` table.
//!
//! Rows reference files in the client-keyed document store; the logic
//! layer keeps both sides in step inside one transaction.

use causa_core::types::DbId;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::models::document::{CreateDocument, Document, UpdateDocument};

const COLUMNS: &str = "id, process_id, title, original_filename, stored_path, content_hash, \
                       size_bytes, deleted_at, created_at, updated_at";

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a document row inside a caller-owned transaction, so the
    /// file-store write and the row commit or roll back together.
    pub async fn create_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents
                (process_id, title, original_filename, stored_path, content_hash, size_bytes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.process_id)
            .bind(&input.title)
            .bind(&input.original_filename)
            .bind(&input.stored_path)
            .bind(&input.content_hash)
            .bind(input.size_bytes)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find an active document by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a document by ID, including soft-deleted rows.
    pub async fn find_by_id_any(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a process's active documents, newest first.
    pub async fn list_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE process_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// Stored paths of every document row for a process, including
    /// soft-deleted ones. Used to clean the file store when a process is
    /// hard-deleted.
    pub async fn stored_paths_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT stored_path FROM documents WHERE process_id = $1")
                .bind(process_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(p,)| p).collect())
    }

    /// Update a document. Only the title is editable.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET
                title = COALESCE($2, title),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a document. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE documents SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted document. Returns `true` if a row was restored.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE documents SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a document row inside a caller-owned transaction; the
    /// logic layer removes the stored file after commit.
    pub async fn hard_delete_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
