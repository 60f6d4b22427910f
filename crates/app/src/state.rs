use causa_core::store::DocumentStore;
use causa_db::DbPool;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Everything the services share: the connection pool, the document
/// store, and the loaded configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub store: DocumentStore,
    pub config: AppConfig,
}

impl AppState {
    /// Full startup: connect, health-check, migrate, and prepare the
    /// document store root.
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        let pool = causa_db::create_pool(&config.database_url).await?;
        tracing::info!(url = %config.database_url, "Database pool created");

        causa_db::health_check(&pool).await?;
        causa_db::run_migrations(&pool)
            .await
            .map_err(|e| AppError::Internal(format!("migration failed: {e}")))?;
        tracing::info!("Database migrations applied");

        Self::with_pool(pool, config)
    }

    /// Build state over an existing pool. Used by tests, which get their
    /// pool (and migrations) from the test harness.
    pub fn with_pool(pool: DbPool, config: AppConfig) -> AppResult<Self> {
        std::fs::create_dir_all(&config.document_root)?;
        let store = DocumentStore::new(&config.document_root);
        Ok(Self { pool, store, config })
    }
}
