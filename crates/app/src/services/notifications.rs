//! Per-user notifications.

use causa_core::types::DbId;
use causa_db::models::notification::Notification;
use causa_db::repositories::NotificationRepo;
use chrono::{Duration, Utc};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct NotificationService<'a> {
    state: &'a AppState,
}

impl<'a> NotificationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn unread(&self, user_id: DbId) -> AppResult<Vec<Notification>> {
        Ok(NotificationRepo::list_for_user(&self.state.pool, user_id, true).await?)
    }

    pub async fn all(&self, user_id: DbId) -> AppResult<Vec<Notification>> {
        Ok(NotificationRepo::list_for_user(&self.state.pool, user_id, false).await?)
    }

    pub async fn mark_read(&self, id: DbId) -> AppResult<()> {
        if !NotificationRepo::mark_read(&self.state.pool, id).await? {
            return Err(AppError::not_found("Notification", id));
        }
        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: DbId) -> AppResult<u64> {
        Ok(NotificationRepo::mark_all_read(&self.state.pool, user_id).await?)
    }

    /// Drop read notifications older than `days` days.
    pub async fn sweep_read(&self, days: i64) -> AppResult<u64> {
        let cutoff = Utc::now() - Duration::days(days);
        let removed = NotificationRepo::delete_read_before(&self.state.pool, cutoff).await?;
        if removed > 0 {
            tracing::debug!(removed, "Old read notifications swept");
        }
        Ok(removed)
    }
}
