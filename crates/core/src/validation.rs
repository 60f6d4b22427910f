//! Field validation rules for the record types the practice manages.
//!
//! Uniqueness itself is enforced by the storage layer; these functions only
//! reject values that could never be stored (empty keys, illegal characters,
//! out-of-range amounts) so the UI gets a message before touching the
//! database.

use crate::error::CoreError;

/// Maximum length accepted for a client identification number.
pub const MAX_IDENTIFICATION_LEN: usize = 20;

/// Maximum length accepted for a process docket number.
pub const MAX_DOCKET_LEN: usize = 50;

/// Username length bounds.
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 32;

/// Valid accounting directions.
pub const DIRECTION_INCOME: &str = "income";
pub const DIRECTION_EXPENSE: &str = "expense";

const VALID_DIRECTIONS: &[&str] = &[DIRECTION_INCOME, DIRECTION_EXPENSE];

/// Validate a client identification (national ID / tax number).
///
/// Accepts 5..=20 characters of digits, letters, and dashes.
pub fn validate_identification(identification: &str) -> Result<(), CoreError> {
    let id = identification.trim();
    if id.len() < 5 || id.len() > MAX_IDENTIFICATION_LEN {
        return Err(CoreError::Validation(format!(
            "Identification must be 5-{MAX_IDENTIFICATION_LEN} characters, got {}",
            id.len()
        )));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CoreError::Validation(
            "Identification may only contain letters, digits, and dashes".into(),
        ));
    }
    Ok(())
}

/// Validate a process docket number (court file number).
///
/// Docket formats vary by court, so this only rejects empty values,
/// whitespace, and values too long for the index.
pub fn validate_docket_number(docket: &str) -> Result<(), CoreError> {
    let docket = docket.trim();
    if docket.is_empty() {
        return Err(CoreError::Validation("Docket number must not be empty".into()));
    }
    if docket.len() > MAX_DOCKET_LEN {
        return Err(CoreError::Validation(format!(
            "Docket number must be at most {MAX_DOCKET_LEN} characters"
        )));
    }
    if docket.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Docket number must not contain whitespace".into(),
        ));
    }
    Ok(())
}

/// Validate a username: 3..=32 characters of `[a-z0-9._-]`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.len() < MIN_USERNAME_LEN || username.len() > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be {MIN_USERNAME_LEN}-{MAX_USERNAME_LEN} characters"
        )));
    }
    let ok = username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));
    if !ok {
        return Err(CoreError::Validation(
            "Username may only contain lowercase letters, digits, '.', '_', and '-'".into(),
        ));
    }
    Ok(())
}

/// Validate that `direction` is either `"income"` or `"expense"`.
pub fn validate_direction(direction: &str) -> Result<(), CoreError> {
    if VALID_DIRECTIONS.contains(&direction) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid direction '{direction}'. Must be one of: {VALID_DIRECTIONS:?}"
        )))
    }
}

/// Validate an accounting amount in cents. Amounts are stored unsigned of
/// direction, so zero and negative values are rejected.
pub fn validate_amount_cents(amount_cents: i64) -> Result<(), CoreError> {
    if amount_cents <= 0 {
        return Err(CoreError::Validation(
            "Amount must be a positive number of cents".into(),
        ));
    }
    Ok(())
}
