//! The per-process action log.

use causa_core::types::DbId;
use causa_db::models::actuacion::{Actuacion, CreateActuacion, UpdateActuacion};
use causa_db::repositories::{ActuacionRepo, ProcessRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct ActuacionService<'a> {
    state: &'a AppState,
}

impl<'a> ActuacionService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn log(&self, input: CreateActuacion) -> AppResult<Actuacion> {
        ProcessRepo::find_by_id(&self.state.pool, input.process_id)
            .await?
            .ok_or_else(|| AppError::not_found("Process", input.process_id))?;
        Ok(ActuacionRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Actuacion> {
        ActuacionRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Actuacion", id))
    }

    pub async fn list_for_process(&self, process_id: DbId) -> AppResult<Vec<Actuacion>> {
        Ok(ActuacionRepo::list_for_process(&self.state.pool, process_id).await?)
    }

    pub async fn correct(&self, id: DbId, input: UpdateActuacion) -> AppResult<Actuacion> {
        ActuacionRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Actuacion", id))
    }

    pub async fn soft_delete(&self, id: DbId) -> AppResult<()> {
        if !ActuacionRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Actuacion", id));
        }
        Ok(())
    }
}
