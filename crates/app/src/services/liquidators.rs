//! Registered liquidators and their launches.

use std::path::Path;

use causa_core::launch::{self, ToolInput, ToolKind, ToolOutput};
use causa_core::types::DbId;
use causa_db::models::liquidator::{CreateLiquidator, Liquidator, UpdateLiquidator};
use causa_db::repositories::LiquidatorRepo;
use causa_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub struct LiquidatorService<'a> {
    state: &'a AppState,
}

impl<'a> LiquidatorService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Register a tool. The kind must parse; the path is only checked at
    /// launch time, since tools live outside the application's control.
    pub async fn register(&self, input: CreateLiquidator) -> AppResult<Liquidator> {
        parse_kind(&input.kind)?;
        if input.executable_path.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Executable path must not be empty".into(),
            )));
        }
        Ok(LiquidatorRepo::create(&self.state.pool, &input).await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Liquidator> {
        LiquidatorRepo::find_by_id(&self.state.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Liquidator", id))
    }

    pub async fn list(&self) -> AppResult<Vec<Liquidator>> {
        Ok(LiquidatorRepo::list(&self.state.pool).await?)
    }

    pub async fn update(&self, id: DbId, input: UpdateLiquidator) -> AppResult<Liquidator> {
        if let Some(kind) = &input.kind {
            parse_kind(kind)?;
        }
        LiquidatorRepo::update(&self.state.pool, id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Liquidator", id))
    }

    pub async fn soft_delete(&self, id: DbId) -> AppResult<()> {
        if !LiquidatorRepo::soft_delete(&self.state.pool, id).await? {
            return Err(AppError::not_found("Liquidator", id));
        }
        Ok(())
    }

    /// Launch a registered tool with a JSON payload on stdin and the
    /// configured timeout. Output is returned to the caller verbatim.
    pub async fn launch(&self, id: DbId, payload: serde_json::Value) -> AppResult<ToolOutput> {
        let liquidator = self.get(id).await?;
        let kind = parse_kind(&liquidator.kind)?;

        let input = ToolInput {
            data: payload,
            env_vars: Vec::new(),
            working_directory: None,
            timeout: self.state.config.tool_timeout,
        };

        tracing::info!(liquidator_id = id, path = %liquidator.executable_path, "Launching liquidator");
        let output = launch::run_tool(kind, Path::new(&liquidator.executable_path), input).await?;
        tracing::debug!(liquidator_id = id, exit_code = output.exit_code, "Liquidator finished");
        Ok(output)
    }
}

fn parse_kind(kind: &str) -> AppResult<ToolKind> {
    kind.parse::<ToolKind>()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))
}
