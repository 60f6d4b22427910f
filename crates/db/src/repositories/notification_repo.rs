//! Repository for the `notifications` table.

use causa_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::notification::{CreateNotification, Notification};

const COLUMNS: &str = "id, user_id, event_id, title, message, is_read, read_at, created_at";

/// Provides operations for per-user notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, event_id, title, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(input.event_id)
            .bind(&input.title)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Whether a reminder notification already exists for `(user, event)`,
    /// read or not. The reminder sweep uses this to stay idempotent.
    pub async fn exists_for_event(
        pool: &SqlitePool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND event_id = $2",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0 > 0)
    }

    /// List a user's notifications, newest first. With `unread_only`, read
    /// notifications are filtered out.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only { "AND is_read = 0" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1 {filter}
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Mark one notification read. Returns `true` if the row was updated.
    pub async fn mark_read(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = datetime('now')
             WHERE id = $1 AND is_read = 0",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's notifications read. Returns the number updated.
    pub async fn mark_all_read(pool: &SqlitePool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = datetime('now')
             WHERE user_id = $1 AND is_read = 0",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete read notifications created before `cutoff`. Returns the
    /// number removed.
    ///
    /// `created_at` is written by SQLite (`datetime('now')`) while the
    /// cutoff is bound from Rust; `datetime()` normalizes both sides to
    /// the same format before comparing.
    pub async fn delete_read_before(
        pool: &SqlitePool,
        cutoff: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM notifications
             WHERE is_read = 1 AND datetime(created_at) < datetime($1)",
        )
        .bind(cutoff)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
