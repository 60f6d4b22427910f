//! The unified recycle bin spanning all soft-deletable entity types.

use causa_core::error::CoreError;
use causa_core::types::DbId;
use causa_db::repositories::trash_repo::{is_known_entity_type, PurgePreview, TrashSummary};
use causa_db::repositories::{
    AccountingEntryRepo, AccountingTypeRepo, ActuacionRepo, ClientRepo, DocumentRepo, EventRepo,
    LiquidatorRepo, ProcessRepo, RobotSearchRepo, TrashRepo,
};
use causa_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct TrashService<'a> {
    state: &'a AppState,
}

impl<'a> TrashService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// List trashed items, optionally filtered by entity type.
    pub async fn list(&self, entity_type: Option<&str>) -> AppResult<TrashSummary> {
        if let Some(et) = entity_type {
            validate_entity_type(et)?;
        }
        Ok(TrashRepo::list_trashed(&self.state.pool, entity_type).await?)
    }

    /// Restore a trashed entity. Fails with a conflict if its parent is
    /// also trashed (restore the parent first), and not-found if the
    /// entity is not in the trash.
    pub async fn restore(&self, entity_type: &str, id: DbId) -> AppResult<()> {
        validate_entity_type(entity_type)?;

        if let Some(msg) =
            TrashRepo::check_parent_trashed(&self.state.pool, entity_type, id).await?
        {
            return Err(AppError::Core(CoreError::Conflict(msg)));
        }

        let restored = dispatch_restore(&self.state.pool, entity_type, id).await?;
        if !restored {
            return Err(AppError::not_found("TrashedItem", id));
        }
        tracing::info!(entity_type, id, "Restored from trash");
        Ok(())
    }

    /// Preview how many rows a purge-all would remove, by entity type,
    /// with estimated bytes reclaimed from the document store.
    pub async fn purge_preview(&self) -> AppResult<PurgePreview> {
        Ok(TrashRepo::purge_preview(&self.state.pool).await?)
    }

    /// Hard-delete one trashed record. Documents also lose their stored
    /// file.
    pub async fn purge_one(&self, entity_type: &str, id: DbId) -> AppResult<()> {
        validate_entity_type(entity_type)?;

        // Capture the stored path before the row disappears.
        let stored_path = if entity_type == "documents" {
            DocumentRepo::find_by_id_any(&self.state.pool, id)
                .await?
                .map(|d| d.stored_path)
        } else {
            None
        };

        if !TrashRepo::purge_one(&self.state.pool, entity_type, id).await? {
            return Err(AppError::not_found("TrashedItem", id));
        }

        if let Some(path) = stored_path {
            if let Err(e) = self.state.store.remove(&path) {
                tracing::warn!(id, error = %e, "Stored file cleanup failed");
            }
        }
        Ok(())
    }

    /// Hard-delete every trashed record, cleaning trashed documents out
    /// of the file store as well.
    pub async fn purge_all(&self) -> AppResult<()> {
        let stored_paths: Vec<(String,)> =
            sqlx::query_as("SELECT stored_path FROM documents WHERE deleted_at IS NOT NULL")
                .fetch_all(&self.state.pool)
                .await
                .map_err(AppError::from)?;

        TrashRepo::purge_all(&self.state.pool).await?;

        for (path,) in stored_paths {
            if let Err(e) = self.state.store.remove(&path) {
                tracing::warn!(path = %path, error = %e, "Stored file cleanup failed");
            }
        }
        tracing::info!("Trash purged");
        Ok(())
    }
}

/// Validate that `entity_type` is one of the known soft-deletable types.
fn validate_entity_type(entity_type: &str) -> AppResult<()> {
    if is_known_entity_type(entity_type) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown entity type '{entity_type}'"
        ))))
    }
}

/// Dispatch to the entity-specific restore method.
async fn dispatch_restore(pool: &DbPool, entity_type: &str, id: DbId) -> AppResult<bool> {
    let restored = match entity_type {
        "clients" => ClientRepo::restore(pool, id).await?,
        "processes" => ProcessRepo::restore(pool, id).await?,
        "documents" => DocumentRepo::restore(pool, id).await?,
        "accounting_types" => AccountingTypeRepo::restore(pool, id).await?,
        "accounting_entries" => AccountingEntryRepo::restore(pool, id).await?,
        "events" => EventRepo::restore(pool, id).await?,
        "actuaciones" => ActuacionRepo::restore(pool, id).await?,
        "liquidators" => LiquidatorRepo::restore(pool, id).await?,
        "robot_searches" => RobotSearchRepo::restore(pool, id).await?,
        // validate_entity_type has already run.
        _ => false,
    };
    Ok(restored)
}
