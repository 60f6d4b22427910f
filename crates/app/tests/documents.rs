//! Document attachment: store + row moving together.

mod common;

use assert_matches::assert_matches;
use causa_app::services::{DocumentService, ProcessService};
use causa_app::AppError;
use causa_core::error::CoreError;
use causa_core::hashing;
use common::*;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn attach_copies_file_and_records_metadata(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (client, process) = seed_client_process(&state).await;
    let service = DocumentService::new(&state);

    let upload_dir = tempfile::tempdir().unwrap();
    let source = write_upload(&upload_dir, "demanda.pdf", b"%PDF-1.4 claim body");

    let document = service.attach(process.id, &source, None).await.unwrap();

    assert_eq!(document.title, "demanda");
    assert_eq!(document.original_filename, "demanda.pdf");
    assert_eq!(document.size_bytes, b"%PDF-1.4 claim body".len() as i64);
    assert_eq!(document.content_hash, hashing::sha256_hex(b"%PDF-1.4 claim body"));
    assert!(document.stored_path.starts_with(&client.identification));

    // The stored copy exists under the client's directory.
    let absolute = state.store.resolve(&document.stored_path).unwrap();
    assert!(absolute.is_file());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn attach_to_missing_process_is_not_found(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = DocumentService::new(&state);

    let upload_dir = tempfile::tempdir().unwrap();
    let source = write_upload(&upload_dir, "demanda.pdf", b"x");

    let err = service.attach(999, &source, None).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Process", .. }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn purge_removes_row_and_stored_file(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (_client, process) = seed_client_process(&state).await;
    let service = DocumentService::new(&state);

    let upload_dir = tempfile::tempdir().unwrap();
    let source = write_upload(&upload_dir, "contrato.pdf", b"contract body");
    let document = service.attach(process.id, &source, None).await.unwrap();
    let absolute = state.store.resolve(&document.stored_path).unwrap();

    service.detach(document.id).await.unwrap();
    // Trashed, not gone.
    assert!(absolute.is_file());

    service.purge(document.id).await.unwrap();
    assert!(!absolute.exists());
    assert_matches!(
        service.get(document.id).await.unwrap_err(),
        AppError::Core(CoreError::NotFound { .. })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn process_hard_delete_cleans_stored_files(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (_client, process) = seed_client_process(&state).await;
    let documents = DocumentService::new(&state);
    let processes = ProcessService::new(&state);

    let upload_dir = tempfile::tempdir().unwrap();
    let a = documents
        .attach(process.id, &write_upload(&upload_dir, "a.pdf", b"a"), None)
        .await
        .unwrap();
    let b = documents
        .attach(process.id, &write_upload(&upload_dir, "b.pdf", b"b"), None)
        .await
        .unwrap();

    let path_a = state.store.resolve(&a.stored_path).unwrap();
    let path_b = state.store.resolve(&b.stored_path).unwrap();

    processes.hard_delete(process.id).await.unwrap();

    assert!(!path_a.exists());
    assert!(!path_b.exists());
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_changes_title_only(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (_client, process) = seed_client_process(&state).await;
    let service = DocumentService::new(&state);

    let upload_dir = tempfile::tempdir().unwrap();
    let source = write_upload(&upload_dir, "escrito.pdf", b"filing");
    let document = service
        .attach(process.id, &source, Some("Initial filing".into()))
        .await
        .unwrap();
    assert_eq!(document.title, "Initial filing");

    let renamed = service.rename(document.id, "Amended filing".into()).await.unwrap();
    assert_eq!(renamed.title, "Amended filing");
    assert_eq!(renamed.stored_path, document.stored_path);
    assert_eq!(renamed.content_hash, document.content_hash);
}
