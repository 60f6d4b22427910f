//! Cross-table trash listing, parent checks, and purge behaviour.

mod common;

use causa_db::repositories::trash_repo::is_known_entity_type;
use causa_db::repositories::{ClientRepo, DocumentRepo, ProcessRepo, TrashRepo};
use common::*;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_list_trashed_spans_entity_types(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    ProcessRepo::soft_delete(&pool, process.id).await.unwrap();
    ClientRepo::soft_delete(&pool, client.id).await.unwrap();

    let summary = TrashRepo::list_trashed(&pool, None).await.unwrap();
    assert_eq!(summary.total_count, 2);

    let types: Vec<_> = summary.items.iter().map(|i| i.entity_type.as_str()).collect();
    assert!(types.contains(&"clients"));
    assert!(types.contains(&"processes"));

    // Filtered listing returns only the requested type.
    let only_clients = TrashRepo::list_trashed(&pool, Some("clients")).await.unwrap();
    assert_eq!(only_clients.total_count, 1);
    assert_eq!(only_clients.items[0].name_or_label.as_deref(), Some("Ana Torres"));
}

#[sqlx::test]
async fn test_restore_blocked_while_parent_trashed(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    ProcessRepo::soft_delete(&pool, process.id).await.unwrap();
    ClientRepo::soft_delete(&pool, client.id).await.unwrap();

    let blocked = TrashRepo::check_parent_trashed(&pool, "processes", process.id)
        .await
        .unwrap();
    assert!(blocked.is_some(), "restore should be blocked while the client is trashed");

    ClientRepo::restore(&pool, client.id).await.unwrap();
    let clear = TrashRepo::check_parent_trashed(&pool, "processes", process.id)
        .await
        .unwrap();
    assert!(clear.is_none());
}

#[sqlx::test]
async fn test_purge_preview_counts_and_bytes(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    let doc = DocumentRepo::create_in_tx(&mut tx, &new_document(process.id, "claim"))
        .await
        .unwrap();
    tx.commit().await.unwrap();
    DocumentRepo::soft_delete(&pool, doc.id).await.unwrap();

    let preview = TrashRepo::purge_preview(&pool).await.unwrap();
    assert_eq!(preview.total_count, 1);
    assert_eq!(preview.estimated_bytes, Some(1024));
    assert_eq!(preview.counts_by_type.len(), 1);
    assert_eq!(preview.counts_by_type[0].entity_type, "documents");
}

#[sqlx::test]
async fn test_purge_one_requires_trashed_state(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();

    // Active rows cannot be purged through the trash.
    assert!(!TrashRepo::purge_one(&pool, "clients", client.id).await.unwrap());

    ClientRepo::soft_delete(&pool, client.id).await.unwrap();
    assert!(TrashRepo::purge_one(&pool, "clients", client.id).await.unwrap());
    assert!(ClientRepo::find_by_id_any(&pool, client.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_purge_all_empties_the_bin(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();
    ProcessRepo::soft_delete(&pool, process.id).await.unwrap();
    ClientRepo::soft_delete(&pool, client.id).await.unwrap();

    TrashRepo::purge_all(&pool).await.unwrap();
    let summary = TrashRepo::list_trashed(&pool, None).await.unwrap();
    assert_eq!(summary.total_count, 0);
}

#[test]
fn known_entity_types_are_validated() {
    assert!(is_known_entity_type("clients"));
    assert!(is_known_entity_type("actuaciones"));
    assert!(!is_known_entity_type("users"));
    assert!(!is_known_entity_type("clients; DROP TABLE clients"));
}
