//! Client and process service behaviour: validation, conflicts, lifecycle.

mod common;

use assert_matches::assert_matches;
use causa_app::services::{ClientService, ProcessService};
use causa_app::AppError;
use causa_core::error::CoreError;
use causa_db::models::client::{CreateClient, UpdateClient};
use causa_db::models::process::CreateProcess;
use common::*;
use sqlx::SqlitePool;

fn client_input(identification: &str) -> CreateClient {
    CreateClient {
        identification: identification.into(),
        full_name: "Ana Torres".into(),
        email: None,
        phone: None,
        address: None,
        notes: None,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_identification_is_rejected_before_insert(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = ClientService::new(&state);

    let err = service.create(client_input("x!")).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(service.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_identification_surfaces_as_conflict(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = ClientService::new(&state);

    service.create(client_input("12345678-9")).await.unwrap();
    let err = service.create(client_input("12345678-9")).await.unwrap_err();
    assert!(err.is_conflict(), "expected conflict, got {err}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_after_soft_delete_is_not_found(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = ClientService::new(&state);

    let client = service.create(client_input("12345678-9")).await.unwrap();
    service.soft_delete(client.id).await.unwrap();

    let err = service.get(client.id).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Client", .. }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_applies_only_provided_fields(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = ClientService::new(&state);

    let client = service.create(client_input("12345678-9")).await.unwrap();
    let updated = service
        .update(
            client.id,
            UpdateClient {
                email: Some("ana@example.test".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email.as_deref(), Some("ana@example.test"));
    assert_eq!(updated.full_name, client.full_name);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn process_requires_existing_client(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let service = ProcessService::new(&state);

    let err = service
        .create(CreateProcess {
            client_id: 999,
            docket_number: "2026-CV-0001".into(),
            court: None,
            process_type: None,
            opposing_party: None,
            description: None,
            started_on: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Client", .. }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_docket_surfaces_as_conflict(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (_client, process) = seed_client_process(&state).await;
    let service = ProcessService::new(&state);

    let err = service
        .create(CreateProcess {
            client_id: process.client_id,
            docket_number: process.docket_number.clone(),
            court: None,
            process_type: None,
            opposing_party: None,
            description: None,
            started_on: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn whitespace_docket_is_a_validation_error(pool: SqlitePool) {
    let (state, _root) = test_state(pool);
    let (client, _) = seed_client_process(&state).await;
    let service = ProcessService::new(&state);

    let err = service
        .create(CreateProcess {
            client_id: client.id,
            docket_number: "2026 CV 2".into(),
            court: None,
            process_type: None,
            opposing_party: None,
            description: None,
            started_on: None,
        })
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}
