//! Repository for the `accounting_types` lookup table.

use causa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::accounting::{AccountingType, CreateAccountingType, UpdateAccountingType};

const COLUMNS: &str = "id, name, direction, description, deleted_at, created_at, updated_at";

/// Provides CRUD operations for accounting types.
pub struct AccountingTypeRepo;

impl AccountingTypeRepo {
    /// Insert a new accounting type, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAccountingType,
    ) -> Result<AccountingType, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounting_types (name, direction, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountingType>(&query)
            .bind(&input.name)
            .bind(&input.direction)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an active accounting type by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<AccountingType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM accounting_types WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, AccountingType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active accounting type by name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<AccountingType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accounting_types WHERE name = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, AccountingType>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all active accounting types ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<AccountingType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accounting_types WHERE deleted_at IS NULL ORDER BY name"
        );
        sqlx::query_as::<_, AccountingType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an accounting type. Direction is immutable.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAccountingType,
    ) -> Result<Option<AccountingType>, sqlx::Error> {
        let query = format!(
            "UPDATE accounting_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountingType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an accounting type. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE accounting_types SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted accounting type.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE accounting_types SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an accounting type. Fails with a foreign-key violation
    /// while entries still reference it.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounting_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
