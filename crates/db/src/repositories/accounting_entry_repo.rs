//! Repository for the `accounting_entries` table.

use causa_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::accounting::{AccountingEntry, CreateAccountingEntry, UpdateAccountingEntry};

const COLUMNS: &str = "id, process_id, accounting_type_id, amount_cents, concept, entry_date, \
                       deleted_at, created_at, updated_at";

/// Provides CRUD operations for accounting entries.
pub struct AccountingEntryRepo;

impl AccountingEntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAccountingEntry,
    ) -> Result<AccountingEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounting_entries
                (process_id, accounting_type_id, amount_cents, concept, entry_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountingEntry>(&query)
            .bind(input.process_id)
            .bind(input.accounting_type_id)
            .bind(input.amount_cents)
            .bind(&input.concept)
            .bind(input.entry_date)
            .fetch_one(pool)
            .await
    }

    /// Find an active entry by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<AccountingEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accounting_entries WHERE id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, AccountingEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a process's active entries, most recent entry date first.
    pub async fn list_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<AccountingEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accounting_entries
             WHERE process_id = $1 AND deleted_at IS NULL
             ORDER BY entry_date DESC, id DESC"
        );
        sqlx::query_as::<_, AccountingEntry>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// Net balance for a process in cents: income minus expense over
    /// active entries.
    pub async fn balance_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(
                 CASE t.direction WHEN 'income' THEN e.amount_cents ELSE -e.amount_cents END
             ), 0)
             FROM accounting_entries e
             JOIN accounting_types t ON t.id = e.accounting_type_id
             WHERE e.process_id = $1 AND e.deleted_at IS NULL",
        )
        .bind(process_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateAccountingEntry,
    ) -> Result<Option<AccountingEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE accounting_entries SET
                accounting_type_id = COALESCE($2, accounting_type_id),
                amount_cents = COALESCE($3, amount_cents),
                concept = COALESCE($4, concept),
                entry_date = COALESCE($5, entry_date),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AccountingEntry>(&query)
            .bind(id)
            .bind(input.accounting_type_id)
            .bind(input.amount_cents)
            .bind(&input.concept)
            .bind(input.entry_date)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an entry. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE accounting_entries SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted entry.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE accounting_entries SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an entry. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounting_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
