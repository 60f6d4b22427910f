//! Legal-process (case) records.

use causa_core::types::DbId;
use causa_core::validation;
use causa_db::models::process::{CreateProcess, Process, UpdateProcess};
use causa_db::repositories::{ClientRepo, DocumentRepo, ProcessRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct ProcessService<'a> {
    state: &'a AppState,
}

impl<'a> ProcessService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Open a new process under an existing client. The docket number is
    /// validated here and unique at the storage layer.
    pub async fn create(&self, input: CreateProcess) -> AppResult<Process> {
        validation::validate_docket_number(&input.docket_number)?;
        ClientRepo::find_by_id(&self.state.pool, input.client_id)
            .await?
            .ok_or_else(|| AppError::not_found("Client", input.client_id))?;

        let process = ProcessRepo::create(&self.state.pool, &input).await?;
        tracing::info!(process_id = process.id, docket = %process.docket_number, "Process created");
        Ok(process)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Process> {
        ProcessRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Process", id))
    }

    pub async fn find_by_docket(&self, docket_number: &str) -> AppResult<Option<Process>> {
        Ok(ProcessRepo::find_by_docket(&self.state.pool, docket_number).await?)
    }

    pub async fn list(&self) -> AppResult<Vec<Process>> {
        Ok(ProcessRepo::list(&self.state.pool).await?)
    }

    pub async fn list_for_client(&self, client_id: DbId) -> AppResult<Vec<Process>> {
        Ok(ProcessRepo::list_for_client(&self.state.pool, client_id).await?)
    }

    pub async fn update(&self, id: DbId, input: UpdateProcess) -> AppResult<Process> {
        if let Some(docket) = &input.docket_number {
            validation::validate_docket_number(docket)?;
        }
        ProcessRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Process", id))
    }

    /// Move a process to the trash. Its dependent rows stay put; default
    /// queries already hide them behind the process.
    pub async fn soft_delete(&self, id: DbId) -> AppResult<()> {
        if !ProcessRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Process", id));
        }
        Ok(())
    }

    /// Permanently delete a process. Dependent rows cascade; stored
    /// document files are removed afterwards, best-effort.
    pub async fn hard_delete(&self, id: DbId) -> AppResult<()> {
        let stored_paths =
            DocumentRepo::stored_paths_for_process(&self.state.pool, id).await?;

        if !ProcessRepo::hard_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Process", id));
        }

        for path in stored_paths {
            if let Err(e) = self.state.store.remove(&path) {
                tracing::warn!(process_id = id, path = %path, error = %e, "Stored file cleanup failed");
            }
        }
        tracing::info!(process_id = id, "Process hard-deleted");
        Ok(())
    }
}
