//! Liquidator registration and launching.

mod common;

use assert_matches::assert_matches;
use causa_app::services::LiquidatorService;
use causa_app::AppError;
use causa_core::error::CoreError;
use causa_core::launch::LaunchError;
use causa_db::models::liquidator::CreateLiquidator;
use common::*;
use sqlx::SqlitePool;

fn shell_tool(path: &str) -> CreateLiquidator {
    CreateLiquidator {
        name: "Interest calculator".into(),
        executable_path: path.into(),
        kind: "shell".into(),
        description: None,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_kind_is_rejected(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = LiquidatorService::new(&state);

    let err = service
        .register(CreateLiquidator {
            name: "Bad".into(),
            executable_path: "/opt/tools/x".into(),
            kind: "perl".into(),
            description: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_path_is_rejected(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = LiquidatorService::new(&state);

    let err = service.register(shell_tool("  ")).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[cfg(unix)]
#[sqlx::test(migrations = "../db/migrations")]
async fn launch_pipes_payload_and_captures_output(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = LiquidatorService::new(&state);

    // A liquidator that echoes its stdin back as its result.
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("echo.sh");
    std::fs::write(&script, "#!/bin/sh\ncat\n").unwrap();

    let liq = service
        .register(shell_tool(script.to_str().unwrap()))
        .await
        .unwrap();

    let output = service
        .launch(liq.id, serde_json::json!({"principal_cents": 100_000, "rate_bps": 350}))
        .await
        .unwrap();

    assert_eq!(output.exit_code, 0);
    let parsed = output.parsed_output.expect("stdout should parse as JSON");
    assert_eq!(parsed["principal_cents"], 100_000);
}

#[cfg(unix)]
#[sqlx::test(migrations = "../db/migrations")]
async fn launch_of_missing_tool_fails_cleanly(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = LiquidatorService::new(&state);

    let liq = service
        .register(shell_tool("/nonexistent/interest.sh"))
        .await
        .unwrap();
    let err = service.launch(liq.id, serde_json::json!({})).await.unwrap_err();
    assert_matches!(err, AppError::Launch(LaunchError::NotFound(_)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn launch_of_unregistered_id_is_not_found(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = LiquidatorService::new(&state);

    let err = service.launch(42, serde_json::json!({})).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Liquidator", .. }));
}
