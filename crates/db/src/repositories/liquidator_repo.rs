//! Repository for the `liquidators` table.

use causa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::liquidator::{CreateLiquidator, Liquidator, UpdateLiquidator};

const COLUMNS: &str =
    "id, name, executable_path, kind, description, deleted_at, created_at, updated_at";

/// Provides CRUD operations for registered liquidators.
pub struct LiquidatorRepo;

impl LiquidatorRepo {
    /// Register a new liquidator, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateLiquidator,
    ) -> Result<Liquidator, sqlx::Error> {
        let query = format!(
            "INSERT INTO liquidators (name, executable_path, kind, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Liquidator>(&query)
            .bind(&input.name)
            .bind(&input.executable_path)
            .bind(&input.kind)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an active liquidator by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Liquidator>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM liquidators WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Liquidator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active liquidators ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Liquidator>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM liquidators WHERE deleted_at IS NULL ORDER BY name");
        sqlx::query_as::<_, Liquidator>(&query).fetch_all(pool).await
    }

    /// Update a registered liquidator. Only non-`None` fields are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateLiquidator,
    ) -> Result<Option<Liquidator>, sqlx::Error> {
        let query = format!(
            "UPDATE liquidators SET
                name = COALESCE($2, name),
                executable_path = COALESCE($3, executable_path),
                kind = COALESCE($4, kind),
                description = COALESCE($5, description),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Liquidator>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.executable_path)
            .bind(&input.kind)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a liquidator. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE liquidators SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted liquidator.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE liquidators SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a liquidator. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM liquidators WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
