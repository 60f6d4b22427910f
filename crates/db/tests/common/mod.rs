//! Shared row builders for the repository tests.
#![allow(dead_code)]

use causa_core::types::DbId;
use causa_db::models::accounting::{CreateAccountingEntry, CreateAccountingType};
use causa_db::models::actuacion::CreateActuacion;
use causa_db::models::client::CreateClient;
use causa_db::models::document::CreateDocument;
use causa_db::models::event::CreateEvent;
use causa_db::models::process::CreateProcess;
use chrono::{Duration, NaiveDate, Utc};

pub fn new_client(identification: &str, name: &str) -> CreateClient {
    CreateClient {
        identification: identification.to_string(),
        full_name: name.to_string(),
        email: Some(format!("{identification}@example.test")),
        phone: None,
        address: None,
        notes: None,
    }
}

pub fn new_process(client_id: DbId, docket: &str) -> CreateProcess {
    CreateProcess {
        client_id,
        docket_number: docket.to_string(),
        court: Some("First Instance No. 4".to_string()),
        process_type: Some("civil".to_string()),
        opposing_party: None,
        description: None,
        started_on: NaiveDate::from_ymd_opt(2026, 1, 15),
    }
}

pub fn new_document(process_id: DbId, title: &str) -> CreateDocument {
    CreateDocument {
        process_id,
        title: title.to_string(),
        original_filename: format!("{title}.pdf"),
        stored_path: format!("12345678-9/{title}.pdf"),
        content_hash: "0".repeat(64),
        size_bytes: 1024,
    }
}

pub fn new_entry(process_id: DbId, type_id: DbId, cents: i64) -> CreateAccountingEntry {
    CreateAccountingEntry {
        process_id,
        accounting_type_id: type_id,
        amount_cents: cents,
        concept: "test entry".to_string(),
        entry_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    }
}

pub fn new_accounting_type(name: &str, direction: &str) -> CreateAccountingType {
    CreateAccountingType {
        name: name.to_string(),
        direction: direction.to_string(),
        description: None,
    }
}

pub fn new_event(process_id: DbId, title: &str) -> CreateEvent {
    CreateEvent {
        process_id,
        title: title.to_string(),
        starts_at: Utc::now() + Duration::days(3),
        ends_at: None,
        location: Some("Courtroom 2".to_string()),
        reminder_minutes: Some(60),
        notes: None,
    }
}

pub fn new_actuacion(process_id: DbId, title: &str) -> CreateActuacion {
    CreateActuacion {
        process_id,
        action_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
        title: title.to_string(),
        detail: None,
        recorded_by: None,
    }
}
