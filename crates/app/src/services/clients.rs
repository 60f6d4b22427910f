//! Client records.

use causa_core::types::DbId;
use causa_core::validation;
use causa_db::models::client::{Client, CreateClient, UpdateClient};
use causa_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct ClientService<'a> {
    state: &'a AppState,
}

impl<'a> ClientService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a client. Rejects malformed identifications before touching
    /// the database; a duplicate identification surfaces as a conflict.
    pub async fn create(&self, input: CreateClient) -> AppResult<Client> {
        validation::validate_identification(&input.identification)?;
        let client = ClientRepo::create(&self.state.pool, &input).await?;
        tracing::info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Client> {
        ClientRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Client", id))
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        Ok(ClientRepo::list(&self.state.pool).await?)
    }

    /// Filter box behind the client table.
    pub async fn search(&self, fragment: &str) -> AppResult<Vec<Client>> {
        Ok(ClientRepo::search_by_name(&self.state.pool, fragment).await?)
    }

    pub async fn update(&self, id: DbId, input: UpdateClient) -> AppResult<Client> {
        ClientRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Client", id))
    }

    /// Move a client to the trash.
    pub async fn soft_delete(&self, id: DbId) -> AppResult<()> {
        if !ClientRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Client", id));
        }
        Ok(())
    }

    /// Permanently delete a client, its processes, their dependent rows,
    /// and the client's stored document files.
    pub async fn hard_delete(&self, id: DbId) -> AppResult<()> {
        let client = ClientRepo::find_by_id_any(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Client", id))?;

        ClientRepo::hard_delete(&self.state.pool, id).await?;

        // Row cascade already removed the document rows; the files are
        // cleaned up afterwards, best-effort.
        if let Err(e) = self.state.store.remove_client_tree(&client.identification) {
            tracing::warn!(client_id = id, error = %e, "Document tree cleanup failed");
        }
        tracing::info!(client_id = id, "Client hard-deleted");
        Ok(())
    }
}
