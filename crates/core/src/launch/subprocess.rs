//! Shared subprocess runner used by all three executors.
//!
//! Each executor builds a [`tokio::process::Command`] for its runtime and
//! delegates the actual spawn, stdin piping, output capture, and timeout
//! enforcement here.

use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use super::executor::{LaunchError, ToolInput, ToolOutput};

/// Maximum stdout or stderr size captured per stream (10 MiB). Output
/// beyond this is truncated; a liquidator that prints more than this is
/// misbehaving.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Spawn `cmd`, pipe the JSON payload to stdin, capture stdout/stderr, and
/// enforce the configured timeout. The caller sets the program and
/// arguments; env vars and working directory from [`ToolInput`] are applied
/// here.
pub async fn run_command(cmd: &mut Command, input: ToolInput) -> Result<ToolOutput, LaunchError> {
    // `kill_on_drop(true)` ensures the child dies with its handle when the
    // timeout path drops it.
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    for (key, value) in &input.env_vars {
        cmd.env(key, value);
    }
    if let Some(dir) = &input.working_directory {
        cmd.current_dir(dir);
    }

    let start = Instant::now();
    let mut child = cmd.spawn()?;

    // Write the JSON payload to stdin, then close it. Best-effort: a tool
    // that never reads stdin closes the pipe early and that is fine.
    if let Some(mut stdin) = child.stdin.take() {
        let payload = serde_json::to_vec(&input.data).unwrap_or_default();
        let _ = stdin.write_all(&payload).await;
        drop(stdin);
    }

    // Read both streams in tasks so `child.wait()` can borrow the child.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    match tokio::time::timeout(input.timeout, child.wait()).await {
        Ok(Ok(status)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let stdout_bytes = stdout_task.await.unwrap_or_default();
            let stderr_bytes = stderr_task.await.unwrap_or_default();
            let stdout = String::from_utf8_lossy(&stdout_bytes).into_owned();
            let stderr = String::from_utf8_lossy(&stderr_bytes).into_owned();
            let exit_code = status.code().unwrap_or(-1);

            let parsed_output = serde_json::from_str(stdout.trim()).ok();

            tracing::debug!(exit_code, duration_ms, "Tool run finished");
            Ok(ToolOutput {
                stdout,
                stderr,
                exit_code,
                duration_ms,
                parsed_output,
            })
        }
        Ok(Err(e)) => Err(LaunchError::Io(e)),
        Err(_) => {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            // Dropping `child` here kills the process (kill_on_drop).
            drop(child);
            stdout_task.abort();
            stderr_task.abort();
            tracing::warn!(elapsed_ms, "Tool run timed out");
            Err(LaunchError::Timeout { elapsed_ms })
        }
    }
}

/// Read a child stream to completion, truncating at [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(stream: Option<R>) -> Vec<u8> {
    let Some(mut stream) = stream else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                if out.len() + n > MAX_OUTPUT_BYTES {
                    out.extend_from_slice(&buf[..MAX_OUTPUT_BYTES - out.len()]);
                    break;
                }
                out.extend_from_slice(&buf[..n]);
            }
        }
    }
    out
}
