//! Calendar events and reminder sweeping.

use causa_core::calendar;
use causa_core::types::{DbId, Timestamp};
use causa_db::models::event::{CreateEvent, Event, UpdateEvent};
use causa_db::models::notification::CreateNotification;
use causa_db::repositories::{EventRepo, NotificationRepo, ProcessRepo};
use chrono::{Duration, Utc};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct CalendarService<'a> {
    state: &'a AppState,
}

impl<'a> CalendarService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn create_event(&self, input: CreateEvent) -> AppResult<Event> {
        calendar::validate_range(input.starts_at, input.ends_at)?;
        if let Some(minutes) = input.reminder_minutes {
            calendar::validate_reminder(minutes)?;
        }
        ProcessRepo::find_by_id(&self.state.pool, input.process_id)
            .await?
            .ok_or_else(|| AppError::not_found("Process", input.process_id))?;

        Ok(EventRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Event> {
        EventRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Event", id))
    }

    pub async fn list_for_process(&self, process_id: DbId) -> AppResult<Vec<Event>> {
        Ok(EventRepo::list_for_process(&self.state.pool, process_id).await?)
    }

    /// Events starting in the next `days` days, for the agenda pane.
    pub async fn upcoming(&self, days: i64) -> AppResult<Vec<Event>> {
        let now = Utc::now();
        Ok(EventRepo::list_between(&self.state.pool, now, now + Duration::days(days)).await?)
    }

    pub async fn update_event(&self, id: DbId, input: UpdateEvent) -> AppResult<Event> {
        if let Some(minutes) = input.reminder_minutes {
            calendar::validate_reminder(minutes)?;
        }
        // Validate the range the row will have after the patch, before
        // anything is written.
        let current = self.get(id).await?;
        let starts_at = input.starts_at.unwrap_or(current.starts_at);
        let ends_at = input.ends_at.or(current.ends_at);
        calendar::validate_range(starts_at, ends_at)?;

        EventRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Event", id))
    }

    pub async fn soft_delete_event(&self, id: DbId) -> AppResult<()> {
        if !EventRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Event", id));
        }
        Ok(())
    }

    /// Create reminder notifications for `user_id` for every event whose
    /// reminder window contains `now`. Idempotent: an event reminds each
    /// user at most once, however often the sweep runs.
    pub async fn sweep_reminders(&self, user_id: DbId, now: Timestamp) -> AppResult<Vec<DbId>> {
        // Any due reminder's event starts within the maximum lead-time.
        let horizon = now + Duration::minutes(calendar::MAX_REMINDER_MINUTES);
        let candidates = EventRepo::list_between(&self.state.pool, now, horizon).await?;

        let mut created = Vec::new();
        for event in candidates {
            if !calendar::is_reminder_due(now, event.starts_at, event.reminder_minutes) {
                continue;
            }
            if NotificationRepo::exists_for_event(&self.state.pool, user_id, event.id).await? {
                continue;
            }
            let notification = NotificationRepo::create(
                &self.state.pool,
                &CreateNotification {
                    user_id,
                    event_id: Some(event.id),
                    title: format!("Upcoming: {}", event.title),
                    message: format!(
                        "{} starts at {}",
                        event.title,
                        event.starts_at.format("%Y-%m-%d %H:%M")
                    ),
                },
            )
            .await?;
            created.push(notification.id);
        }

        if !created.is_empty() {
            tracing::info!(user_id, count = created.len(), "Reminder notifications created");
        }
        Ok(created)
    }
}
