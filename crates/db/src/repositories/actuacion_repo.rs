//! Repository for the `actuaciones` table.

use causa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::actuacion::{Actuacion, CreateActuacion, UpdateActuacion};

const COLUMNS: &str = "id, process_id, action_date, title, detail, recorded_by, deleted_at, \
                       created_at, updated_at";

/// Provides CRUD operations for actuaciones (case actions).
pub struct ActuacionRepo;

impl ActuacionRepo {
    /// Log a new actuación, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateActuacion,
    ) -> Result<Actuacion, sqlx::Error> {
        let query = format!(
            "INSERT INTO actuaciones (process_id, action_date, title, detail, recorded_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actuacion>(&query)
            .bind(input.process_id)
            .bind(input.action_date)
            .bind(&input.title)
            .bind(&input.detail)
            .bind(input.recorded_by)
            .fetch_one(pool)
            .await
    }

    /// Find an active actuación by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Actuacion>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM actuaciones WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Actuacion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A process's action log, most recent action first.
    pub async fn list_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<Actuacion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM actuaciones
             WHERE process_id = $1 AND deleted_at IS NULL
             ORDER BY action_date DESC, id DESC"
        );
        sqlx::query_as::<_, Actuacion>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// Correct an actuación. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateActuacion,
    ) -> Result<Option<Actuacion>, sqlx::Error> {
        let query = format!(
            "UPDATE actuaciones SET
                action_date = COALESCE($2, action_date),
                title = COALESCE($3, title),
                detail = COALESCE($4, detail),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actuacion>(&query)
            .bind(id)
            .bind(input.action_date)
            .bind(&input.title)
            .bind(&input.detail)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an actuación. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actuaciones SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted actuación.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actuaciones SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an actuación. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actuaciones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
