//! Soft-delete, restore, and hard-delete behaviour across entity types.
//!
//! Verifies that:
//! - Soft-deleted entities are hidden from `find_by_id` and list queries
//! - Restoring returns an entity to the active set with identical fields
//! - Soft-delete is idempotent (second call returns `false`)
//! - Hard delete permanently removes a record
//! - The pattern is consistent across entity types

mod common;

use causa_db::repositories::{ClientRepo, EventRepo, LiquidatorRepo, ProcessRepo};
use causa_db::models::liquidator::CreateLiquidator;
use common::*;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_soft_delete_hides_from_find_and_list(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();

    let deleted = ClientRepo::soft_delete(&pool, client.id).await.unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    assert!(ClientRepo::find_by_id(&pool, client.id).await.unwrap().is_none());
    assert!(ClientRepo::list(&pool).await.unwrap().is_empty());
    // Still reachable for the trash flow.
    assert!(ClientRepo::find_by_id_any(&pool, client.id).await.unwrap().is_some());
}

#[sqlx::test]
async fn test_soft_delete_is_idempotent(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    assert!(ClientRepo::soft_delete(&pool, client.id).await.unwrap());
    assert!(!ClientRepo::soft_delete(&pool, client.id).await.unwrap());
}

#[sqlx::test]
async fn test_restore_returns_identical_fields(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    ProcessRepo::soft_delete(&pool, process.id).await.unwrap();
    let restored_flag = ProcessRepo::restore(&pool, process.id).await.unwrap();
    assert!(restored_flag);

    let restored = ProcessRepo::find_by_id(&pool, process.id)
        .await
        .unwrap()
        .expect("restored process should be active again");

    assert_eq!(restored.docket_number, process.docket_number);
    assert_eq!(restored.client_id, process.client_id);
    assert_eq!(restored.court, process.court);
    assert_eq!(restored.process_type, process.process_type);
    assert_eq!(restored.started_on, process.started_on);
    assert_eq!(restored.created_at, process.created_at);
    assert!(restored.deleted_at.is_none());
}

#[sqlx::test]
async fn test_restore_of_active_row_is_a_noop(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    assert!(!ClientRepo::restore(&pool, client.id).await.unwrap());
}

#[sqlx::test]
async fn test_hard_delete_removes_the_row(pool: SqlitePool) {
    let liq = LiquidatorRepo::create(
        &pool,
        &CreateLiquidator {
            name: "Interest calculator".to_string(),
            executable_path: "/opt/tools/interest.py".to_string(),
            kind: "python".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    assert!(LiquidatorRepo::hard_delete(&pool, liq.id).await.unwrap());
    assert!(LiquidatorRepo::find_by_id(&pool, liq.id).await.unwrap().is_none());
    assert!(!LiquidatorRepo::hard_delete(&pool, liq.id).await.unwrap());
}

#[sqlx::test]
async fn test_pattern_consistent_for_events(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();
    let event = EventRepo::create(&pool, &new_event(process.id, "Hearing"))
        .await
        .unwrap();

    assert!(EventRepo::soft_delete(&pool, event.id).await.unwrap());
    assert!(EventRepo::list_for_process(&pool, process.id).await.unwrap().is_empty());
    assert!(EventRepo::restore(&pool, event.id).await.unwrap());
    assert_eq!(EventRepo::list_for_process(&pool, process.id).await.unwrap().len(), 1);
}
