//! Shared fixtures for the service tests.
#![allow(dead_code)]

use std::time::Duration;

use causa_app::{AppConfig, AppState};
use causa_db::models::client::{Client, CreateClient};
use causa_db::models::process::{CreateProcess, Process};
use causa_db::repositories::{ClientRepo, ProcessRepo};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Build an [`AppState`] over a harness-provided pool with a temp
/// document root. Keep the returned [`TempDir`] alive for the test's
/// duration.
pub fn test_state(pool: SqlitePool) -> (AppState, TempDir) {
    let root = TempDir::new().expect("create temp document root");
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        document_root: root.path().to_path_buf(),
        tool_timeout: Duration::from_secs(5),
        ocr: None,
    };
    let state = AppState::with_pool(pool, config).expect("build state");
    (state, root)
}

/// Seed one client with one process.
pub async fn seed_client_process(state: &AppState) -> (Client, Process) {
    let client = ClientRepo::create(
        &state.pool,
        &CreateClient {
            identification: "12345678-9".into(),
            full_name: "Ana Torres".into(),
            email: None,
            phone: None,
            address: None,
            notes: None,
        },
    )
    .await
    .expect("seed client");

    let process = ProcessRepo::create(
        &state.pool,
        &CreateProcess {
            client_id: client.id,
            docket_number: "2026-CV-0001".into(),
            court: Some("First Instance No. 4".into()),
            process_type: None,
            opposing_party: None,
            description: None,
            started_on: None,
        },
    )
    .await
    .expect("seed process");

    (client, process)
}

/// Write a small file to attach as a document.
pub fn write_upload(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write upload fixture");
    path
}
