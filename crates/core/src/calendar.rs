//! Calendar and reminder arithmetic.
//!
//! Pure helpers shared by the events service and its tests. Reminder
//! lead-times are minutes before an event's start; an event with no
//! lead-time configured never produces a reminder.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Largest accepted reminder lead-time: one week.
pub const MAX_REMINDER_MINUTES: i64 = 7 * 24 * 60;

/// The instant a reminder becomes due, or `None` when no lead-time is set.
pub fn reminder_instant(starts_at: Timestamp, reminder_minutes: Option<i64>) -> Option<Timestamp> {
    reminder_minutes.map(|m| starts_at - Duration::minutes(m))
}

/// A reminder is due once its instant has passed but the event has not
/// yet started. Events already underway are the calendar's business, not
/// the notifier's.
pub fn is_reminder_due(now: Timestamp, starts_at: Timestamp, reminder_minutes: Option<i64>) -> bool {
    match reminder_instant(starts_at, reminder_minutes) {
        Some(instant) => instant <= now && now < starts_at,
        None => false,
    }
}

/// Validate that an event's end does not precede its start.
pub fn validate_range(starts_at: Timestamp, ends_at: Option<Timestamp>) -> Result<(), CoreError> {
    if let Some(ends_at) = ends_at {
        if ends_at < starts_at {
            return Err(CoreError::Validation(
                "Event end must not precede its start".into(),
            ));
        }
    }
    Ok(())
}

/// Validate a reminder lead-time in minutes.
pub fn validate_reminder(minutes: i64) -> Result<(), CoreError> {
    if !(0..=MAX_REMINDER_MINUTES).contains(&minutes) {
        return Err(CoreError::Validation(format!(
            "Reminder must be between 0 and {MAX_REMINDER_MINUTES} minutes"
        )));
    }
    Ok(())
}
