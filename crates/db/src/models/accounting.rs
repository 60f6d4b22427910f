//! Accounting type and entry models.
//!
//! Amounts are integer cents; the sign of an entry comes from its type's
//! direction, never from the amount itself.

use causa_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `accounting_types` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountingType {
    pub id: DbId,
    pub name: String,
    /// `"income"` or `"expense"`.
    pub direction: String,
    pub description: Option<String>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an accounting type.
#[derive(Debug, Deserialize)]
pub struct CreateAccountingType {
    pub name: String,
    pub direction: String,
    pub description: Option<String>,
}

/// DTO for updating an accounting type. Direction is immutable; changing
/// it would silently flip the sign of every entry booked against it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountingType {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A row from the `accounting_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AccountingEntry {
    pub id: DbId,
    pub process_id: DbId,
    pub accounting_type_id: DbId,
    pub amount_cents: i64,
    pub concept: String,
    pub entry_date: NaiveDate,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an accounting entry.
#[derive(Debug, Deserialize)]
pub struct CreateAccountingEntry {
    pub process_id: DbId,
    pub accounting_type_id: DbId,
    pub amount_cents: i64,
    pub concept: String,
    pub entry_date: NaiveDate,
}

/// DTO for updating an accounting entry.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAccountingEntry {
    pub accounting_type_id: Option<DbId>,
    pub amount_cents: Option<i64>,
    pub concept: Option<String>,
    pub entry_date: Option<NaiveDate>,
}
