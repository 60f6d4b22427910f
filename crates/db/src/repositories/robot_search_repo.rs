//! Repository for the `robot_searches` table.

use causa_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::robot_search::{CreateRobotSearch, RobotSearch};

const COLUMNS: &str =
    "id, process_id, docket_number, source, payload, fetched_at, deleted_at, created_at";

/// Provides operations for scraped docket-search results.
pub struct RobotSearchRepo;

impl RobotSearchRepo {
    /// Record a scraped result, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateRobotSearch,
    ) -> Result<RobotSearch, sqlx::Error> {
        let query = format!(
            "INSERT INTO robot_searches (process_id, docket_number, source, payload, fetched_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RobotSearch>(&query)
            .bind(input.process_id)
            .bind(&input.docket_number)
            .bind(&input.source)
            .bind(&input.payload)
            .bind(input.fetched_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active search result by internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<RobotSearch>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM robot_searches WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, RobotSearch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active results attached to a process, newest fetch first.
    pub async fn list_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<RobotSearch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM robot_searches
             WHERE process_id = $1 AND deleted_at IS NULL
             ORDER BY fetched_at DESC"
        );
        sqlx::query_as::<_, RobotSearch>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// List active results for a docket number regardless of process
    /// attachment, newest fetch first.
    pub async fn list_for_docket(
        pool: &SqlitePool,
        docket_number: &str,
    ) -> Result<Vec<RobotSearch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM robot_searches
             WHERE docket_number = $1 AND deleted_at IS NULL
             ORDER BY fetched_at DESC"
        );
        sqlx::query_as::<_, RobotSearch>(&query)
            .bind(docket_number)
            .fetch_all(pool)
            .await
    }

    /// Attach an orphan search result to a process once the process record
    /// exists. Returns `true` if the row was updated.
    pub async fn attach_to_process(
        pool: &SqlitePool,
        id: DbId,
        process_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE robot_searches SET process_id = $2
             WHERE id = $1 AND process_id IS NULL",
        )
        .bind(id)
        .bind(process_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a search result. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE robot_searches SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted search result.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE robot_searches SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete results fetched before `cutoff` (stale scrape cache).
    /// Returns the number removed.
    pub async fn prune_fetched_before(
        pool: &SqlitePool,
        cutoff: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM robot_searches WHERE fetched_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
