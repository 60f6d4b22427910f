//! Repository for the `events` table.

use causa_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

const COLUMNS: &str = "id, process_id, title, starts_at, ends_at, location, reminder_minutes, \
                       notes, deleted_at, created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (process_id, title, starts_at, ends_at, location, reminder_minutes, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.process_id)
            .bind(&input.title)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.location)
            .bind(input.reminder_minutes)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an active event by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a process's active events in start order.
    pub async fn list_for_process(
        pool: &SqlitePool,
        process_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE process_id = $1 AND deleted_at IS NULL
             ORDER BY starts_at"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(process_id)
            .fetch_all(pool)
            .await
    }

    /// List active events starting inside `[from, to)`, in start order.
    /// This backs both the calendar's month view and the reminder sweep.
    pub async fn list_between(
        pool: &SqlitePool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE deleted_at IS NULL AND starts_at >= $1 AND starts_at < $2
             ORDER BY starts_at"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                starts_at = COALESCE($3, starts_at),
                ends_at = COALESCE($4, ends_at),
                location = COALESCE($5, location),
                reminder_minutes = COALESCE($6, reminder_minutes),
                notes = COALESCE($7, notes),
                updated_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(&input.location)
            .bind(input.reminder_minutes)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an event. Returns `true` if a row was marked.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET deleted_at = datetime('now')
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted event.
    pub async fn restore(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET deleted_at = NULL
             WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an event. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
