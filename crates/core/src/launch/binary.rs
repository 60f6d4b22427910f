//! Binary executable executor.
//!
//! Runs a pre-compiled liquidator directly (not through a shell). Validates
//! existence and execute permission before spawning.

use std::path::Path;

use super::executor::{LaunchError, ToolExecutor, ToolInput, ToolOutput};
use super::subprocess;

/// Executor for pre-compiled liquidator binaries.
pub struct BinaryExecutor;

impl ToolExecutor for BinaryExecutor {
    async fn execute(&self, path: &Path, input: ToolInput) -> Result<ToolOutput, LaunchError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| LaunchError::NotFound(path.display().to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = metadata.permissions().mode();
            if mode & 0o111 == 0 {
                return Err(LaunchError::PermissionDenied(format!(
                    "{} is not executable (mode {mode:#o})",
                    path.display()
                )));
            }
        }
        #[cfg(not(unix))]
        let _ = metadata;

        let mut cmd = tokio::process::Command::new(path);
        subprocess::run_command(&mut cmd, input).await
    }
}
