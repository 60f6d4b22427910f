//! Python script executor.
//!
//! Most legacy liquidators in the field are python scripts; they run under
//! `python3` with the script path as the only argument.

use std::path::Path;

use super::executor::{LaunchError, ToolExecutor, ToolInput, ToolOutput};
use super::subprocess;

/// Executor for python liquidator scripts.
pub struct PythonExecutor;

impl ToolExecutor for PythonExecutor {
    async fn execute(&self, path: &Path, input: ToolInput) -> Result<ToolOutput, LaunchError> {
        if !path.is_file() {
            return Err(LaunchError::NotFound(path.display().to_string()));
        }
        let mut cmd = tokio::process::Command::new("python3");
        cmd.arg(path);
        subprocess::run_command(&mut cmd, input).await
    }
}
