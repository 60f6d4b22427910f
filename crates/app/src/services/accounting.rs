//! Accounting types and entries.

use causa_core::types::DbId;
use causa_core::validation;
use causa_db::models::accounting::{
    AccountingEntry, AccountingType, CreateAccountingEntry, CreateAccountingType,
    UpdateAccountingEntry, UpdateAccountingType,
};
use causa_db::repositories::{AccountingEntryRepo, AccountingTypeRepo, ProcessRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct AccountingService<'a> {
    state: &'a AppState,
}

impl<'a> AccountingService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    // ── Types ─────────────────────────────────────────────────────────

    pub async fn create_type(&self, input: CreateAccountingType) -> AppResult<AccountingType> {
        validation::validate_direction(&input.direction)?;
        Ok(AccountingTypeRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn list_types(&self) -> AppResult<Vec<AccountingType>> {
        Ok(AccountingTypeRepo::list(&self.state.pool).await?)
    }

    pub async fn update_type(
        &self,
        id: DbId,
        input: UpdateAccountingType,
    ) -> AppResult<AccountingType> {
        AccountingTypeRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("AccountingType", id))
    }

    pub async fn soft_delete_type(&self, id: DbId) -> AppResult<()> {
        if !AccountingTypeRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("AccountingType", id));
        }
        Ok(())
    }

    // ── Entries ───────────────────────────────────────────────────────

    pub async fn create_entry(&self, input: CreateAccountingEntry) -> AppResult<AccountingEntry> {
        validation::validate_amount_cents(input.amount_cents)?;
        ProcessRepo::find_by_id(&self.state.pool, input.process_id)
            .await?
            .ok_or_else(|| AppError::not_found("Process", input.process_id))?;
        AccountingTypeRepo::find_by_id(&self.state.pool, input.accounting_type_id)
            .await?
            .ok_or_else(|| AppError::not_found("AccountingType", input.accounting_type_id))?;

        Ok(AccountingEntryRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn list_entries(&self, process_id: DbId) -> AppResult<Vec<AccountingEntry>> {
        Ok(AccountingEntryRepo::list_for_process(&self.state.pool, process_id).await?)
    }

    /// Income minus expense over a process's active entries, in cents.
    pub async fn balance(&self, process_id: DbId) -> AppResult<i64> {
        Ok(AccountingEntryRepo::balance_for_process(&self.state.pool, process_id).await?)
    }

    pub async fn update_entry(
        &self,
        id: DbId,
        input: UpdateAccountingEntry,
    ) -> AppResult<AccountingEntry> {
        if let Some(amount) = input.amount_cents {
            validation::validate_amount_cents(amount)?;
        }
        AccountingEntryRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("AccountingEntry", id))
    }

    pub async fn soft_delete_entry(&self, id: DbId) -> AppResult<()> {
        if !AccountingEntryRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("AccountingEntry", id));
        }
        Ok(())
    }
}
