//! Liquidator launch engine.
//!
//! A liquidator is an external calculator tool (script or executable)
//! registered by path and launched on demand. Three runtimes are supported:
//! pre-compiled binaries, shell scripts, and python scripts. All subprocess
//! management is pure (no DB access) and lives here so both the logic layer
//! and tests can drive it directly.

pub mod binary;
pub mod executor;
pub mod python;
pub mod shell;
pub mod subprocess;

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use binary::BinaryExecutor;
pub use executor::{LaunchError, ToolExecutor, ToolInput, ToolOutput};
pub use python::PythonExecutor;
pub use shell::ShellExecutor;

/// Runtime kind of a registered liquidator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Binary,
    Shell,
    Python,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Shell => "shell",
            Self::Python => "python",
        }
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Self::Binary),
            "shell" => Ok(Self::Shell),
            "python" => Ok(Self::Python),
            other => Err(format!("Unknown tool kind '{other}'")),
        }
    }
}

/// Launch a tool of the given kind, dispatching to the matching executor.
pub async fn run_tool(
    kind: ToolKind,
    path: &Path,
    input: ToolInput,
) -> Result<ToolOutput, LaunchError> {
    match kind {
        ToolKind::Binary => BinaryExecutor.execute(path, input).await,
        ToolKind::Shell => ShellExecutor.execute(path, input).await,
        ToolKind::Python => PythonExecutor.execute(path, input).await,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [ToolKind::Binary, ToolKind::Shell, ToolKind::Python] {
            assert_eq!(kind.as_str().parse::<ToolKind>().unwrap(), kind);
        }
        assert!("perl".parse::<ToolKind>().is_err());
    }
}
