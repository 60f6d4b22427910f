//! Repository for the `processes` table.

use causa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::process::{CreateProcess, Process, UpdateProcess};

const COLUMNS: &str = "id, client_id, docket_number, court, process_type, opposing_party, \
                       description, started_on, deleted_at, created_at, updated_at";

/// Provides CRUD operations for processes (legal cases).
pub struct ProcessRepo;

impl ProcessRepo {
    /// Insert a new process, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateProcess) -> Result<Process, sqlx::Error> {
        let query = format!(
            "INSERT INTO processes
                (client_id, docket_number, court, process_type, opposing_party,
                 description, started_on)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(input.client_id)
            .bind(&input.docket_number)
            .bind(&input.court)
            .bind(&input.process_type)
            .bind(&input.opposing_party)
            .bind(&input.description)
            .bind(input.started_on)
            .fetch_one(pool)
            .await
    }

    /// Find an active process by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Process>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a process by ID, including soft-deleted rows. Used for the
    /// parent-check on restore.
    pub async fn find_by_id_any(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Process>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM processes WHERE id = $1");
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active process by docket number.
    pub async fn find_by_docket(
        pool: &SqlitePool,
        docket_number: &str,
    ) -> Result<Option<Process>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM processes WHERE docket_number = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(docket_number)
            .fetch_optional(pool)
            .await
    }

    /// List all active processes, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Process>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM processes WHERE deleted_at IS NULL ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Process>(&query).fetch_all(pool).await
    }

    /// List a client's active processes, newest first.
    pub async fn list_for_client(
        pool: &SqlitePool,
        client_id: DbId,
    ) -> Result<Vec<Process>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM processes
             WHERE client_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a process. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProcess,
    ) -> Result<Option<Process>, sqlx::Error> {
        let query = format!(
            "UPDATE processes SET
                docket_number = COALESCE($2, docket_number),
                court = COALESCE($3, court),
                process_type = COALESCE($4, process_type),
                opposing_party = COALESCE($5, opposing_party),
                description = COALESCE($6, description),
                started_on = COALESCE($7, started_on),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Process>(&query)
            .bind(id)
            .bind(&input.docket_number)
            .bind(&input.court)
            .bind(&input.process_type)
            .bind(&input.opposing_party)
            .bind(&input.description)
            .bind(input.started_on)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a process. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE processes SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted process. Returns `true` if a row was restored.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE processes SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a process. Documents, accounting entries, events,
    /// actuaciones, and owned robot searches go with it via `ON DELETE
    /// CASCADE`. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM processes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
