//! CRUD and uniqueness behaviour across the repository layer.

mod common;

use causa_db::models::client::UpdateClient;
use causa_db::models::user::CreateUser;
use causa_db::repositories::{
    AccountingEntryRepo, AccountingTypeRepo, ActuacionRepo, ClientRepo, EventRepo, ProcessRepo,
    UserRepo,
};
use common::*;
use sqlx::SqlitePool;

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.message().contains("UNIQUE constraint failed"))
}

#[sqlx::test]
async fn test_client_create_find_update(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    assert_eq!(client.full_name, "Ana Torres");
    assert!(client.deleted_at.is_none());

    let found = ClientRepo::find_by_id(&pool, client.id).await.unwrap().unwrap();
    assert_eq!(found.identification, "12345678-9");

    let by_ident = ClientRepo::find_by_identification(&pool, "12345678-9")
        .await
        .unwrap();
    assert!(by_ident.is_some());

    let updated = ClientRepo::update(
        &pool,
        client.id,
        &UpdateClient {
            phone: Some("+34 600 000 000".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+34 600 000 000"));
    // Untouched fields survive a partial update.
    assert_eq!(updated.full_name, "Ana Torres");
}

#[sqlx::test]
async fn test_duplicate_client_identification_rejected(pool: SqlitePool) {
    ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let err = ClientRepo::create(&pool, &new_client("12345678-9", "Benito Rey"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err), "expected unique violation, got {err}");
}

#[sqlx::test]
async fn test_duplicate_docket_number_rejected(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();
    let err = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test]
async fn test_duplicate_username_rejected(pool: SqlitePool) {
    let user = CreateUser {
        username: "mgarcia".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        full_name: "María García".to_string(),
    };
    UserRepo::create(&pool, &user).await.unwrap();
    let err = UserRepo::create(&pool, &user).await.unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test]
async fn test_process_scoped_lists(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let p1 = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();
    let p2 = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0002"))
        .await
        .unwrap();

    ActuacionRepo::create(&pool, &new_actuacion(p1.id, "Filed complaint"))
        .await
        .unwrap();
    ActuacionRepo::create(&pool, &new_actuacion(p1.id, "Served notice"))
        .await
        .unwrap();

    assert_eq!(ActuacionRepo::list_for_process(&pool, p1.id).await.unwrap().len(), 2);
    assert!(ActuacionRepo::list_for_process(&pool, p2.id).await.unwrap().is_empty());
    assert_eq!(ProcessRepo::list_for_client(&pool, client.id).await.unwrap().len(), 2);
}

#[sqlx::test]
async fn test_balance_nets_income_against_expense(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    let income = AccountingTypeRepo::find_by_name(&pool, "Professional fees")
        .await
        .unwrap()
        .expect("seeded");
    let expense = AccountingTypeRepo::find_by_name(&pool, "Court fees")
        .await
        .unwrap()
        .expect("seeded");

    AccountingEntryRepo::create(&pool, &new_entry(process.id, income.id, 150_000))
        .await
        .unwrap();
    AccountingEntryRepo::create(&pool, &new_entry(process.id, expense.id, 40_000))
        .await
        .unwrap();

    let balance = AccountingEntryRepo::balance_for_process(&pool, process.id)
        .await
        .unwrap();
    assert_eq!(balance, 110_000);

    // Soft-deleted entries drop out of the balance.
    let refund = AccountingEntryRepo::create(&pool, &new_entry(process.id, expense.id, 10_000))
        .await
        .unwrap();
    AccountingEntryRepo::soft_delete(&pool, refund.id).await.unwrap();
    assert_eq!(
        AccountingEntryRepo::balance_for_process(&pool, process.id).await.unwrap(),
        110_000
    );
}

#[sqlx::test]
async fn test_process_hard_delete_cascades(pool: SqlitePool) {
    let client = ClientRepo::create(&pool, &new_client("12345678-9", "Ana Torres"))
        .await
        .unwrap();
    let process = ProcessRepo::create(&pool, &new_process(client.id, "2026-CV-0001"))
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    causa_db::repositories::DocumentRepo::create_in_tx(&mut tx, &new_document(process.id, "claim"))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let fees = AccountingTypeRepo::find_by_name(&pool, "Court fees")
        .await
        .unwrap()
        .unwrap();
    AccountingEntryRepo::create(&pool, &new_entry(process.id, fees.id, 5_000))
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event(process.id, "Hearing")).await.unwrap();
    ActuacionRepo::create(&pool, &new_actuacion(process.id, "Filed")).await.unwrap();

    let deleted = ProcessRepo::hard_delete(&pool, process.id).await.unwrap();
    assert!(deleted);

    for table in ["documents", "accounting_entries", "events", "actuaciones"] {
        let count: (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE process_id = $1"))
                .bind(process.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count.0, 0, "{table} rows should cascade with their process");
    }
}
