//! Executor trait and shared launch types.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input handed to a launched tool.
#[derive(Debug, Clone)]
pub struct ToolInput {
    /// JSON payload piped to the tool's stdin.
    pub data: Value,
    /// Additional environment variables set for the child process.
    pub env_vars: Vec<(String, String)>,
    /// Working directory for the child process (current dir if `None`).
    pub working_directory: Option<String>,
    /// Maximum wall-clock time before the process is killed.
    pub timeout: Duration,
}

/// Captured output from a finished tool run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Complete stdout captured from the process.
    pub stdout: String,
    /// Complete stderr captured from the process.
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Stdout parsed as JSON, or `None` if stdout is not valid JSON.
    pub parsed_output: Option<Value>,
}

/// Errors that can occur launching a tool.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Tool timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("Tool failed with exit code {exit_code}: {stderr}")]
    ExecutionFailed { exit_code: i32, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait implemented by each runtime executor (binary, shell, python).
///
/// Each executor builds a [`tokio::process::Command`] appropriate for its
/// runtime and delegates spawn + I/O + timeout handling to the shared
/// subprocess runner.
pub trait ToolExecutor {
    fn execute(
        &self,
        path: &Path,
        input: ToolInput,
    ) -> impl std::future::Future<Output = Result<ToolOutput, LaunchError>> + Send;
}
