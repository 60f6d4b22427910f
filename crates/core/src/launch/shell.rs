//! Shell script executor.
//!
//! Spawns `sh` with the script path as its argument, so liquidator scripts
//! do not need the execute bit set.

use std::path::Path;

use super::executor::{LaunchError, ToolExecutor, ToolInput, ToolOutput};
use super::subprocess;

/// Executor for shell liquidator scripts.
pub struct ShellExecutor;

impl ToolExecutor for ShellExecutor {
    async fn execute(&self, path: &Path, input: ToolInput) -> Result<ToolOutput, LaunchError> {
        if !path.is_file() {
            return Err(LaunchError::NotFound(path.display().to_string()));
        }
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg(path);
        subprocess::run_command(&mut cmd, input).await
    }
}
