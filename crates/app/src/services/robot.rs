//! Scraped docket-search results.

use causa_core::types::DbId;
use causa_core::validation;
use causa_db::models::robot_search::{CreateRobotSearch, RobotSearch};
use causa_db::repositories::RobotSearchRepo;
use chrono::{Duration, Utc};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct RobotSearchService<'a> {
    state: &'a AppState,
}

impl<'a> RobotSearchService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Record a scraped result.
    pub async fn record(&self, input: CreateRobotSearch) -> AppResult<RobotSearch> {
        validation::validate_docket_number(&input.docket_number)?;
        Ok(RobotSearchRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn list_for_process(&self, process_id: DbId) -> AppResult<Vec<RobotSearch>> {
        Ok(RobotSearchRepo::list_for_process(&self.state.pool, process_id).await?)
    }

    pub async fn list_for_docket(&self, docket_number: &str) -> AppResult<Vec<RobotSearch>> {
        Ok(RobotSearchRepo::list_for_docket(&self.state.pool, docket_number).await?)
    }

    /// Attach an orphan result to the process it was searched for.
    pub async fn attach_to_process(&self, id: DbId, process_id: DbId) -> AppResult<()> {
        if !RobotSearchRepo::attach_to_process(&self.state.pool, id, process_id).await? {
            return Err(AppError::not_found("RobotSearch", id));
        }
        Ok(())
    }

    pub async fn soft_delete(&self, id: DbId) -> AppResult<()> {
        if !RobotSearchRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("RobotSearch", id));
        }
        Ok(())
    }

    /// Drop results fetched more than `days` days ago.
    pub async fn prune_stale(&self, days: i64) -> AppResult<u64> {
        let cutoff = Utc::now() - Duration::days(days);
        Ok(RobotSearchRepo::prune_fetched_before(&self.state.pool, cutoff).await?)
    }
}
