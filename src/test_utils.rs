//! Shared test utilities for `LegalDesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{
        appointment::AppointmentInput,
        case::{self as case_ops, CaseInput},
        client::{self as client_ops, ClientInput},
        document::DocumentUpload,
        new_id,
    },
    entities::{self, CaseStatus, CaseType, ClientStatus},
    errors::Result,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all core tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a client payload with sensible defaults.
///
/// # Defaults
/// * `email`: lowercase last name at a unique domain
/// * `phone`: `"555-0100"`
/// * `status`: active
pub fn client_input(first_name: &str, last_name: &str) -> ClientInput {
    ClientInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}@{}.example",
            last_name.to_lowercase(),
            uuid::Uuid::new_v4().simple()
        ),
        phone: "555-0100".to_string(),
        address: "1 Main Street".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        postal_code: "62701".to_string(),
        date_of_birth: None,
        occupation: None,
        emergency_contact: None,
        emergency_phone: None,
        status: ClientStatus::Active,
        notes: None,
    }
}

/// Creates an active test client.
pub async fn create_test_client(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> Result<entities::client::Model> {
    client_ops::create_client(db, client_input(first_name, last_name)).await
}

/// Creates a test client with a specific status.
pub async fn create_custom_client(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    status: ClientStatus,
) -> Result<entities::client::Model> {
    let mut input = client_input(first_name, last_name);
    input.status = status;
    client_ops::create_client(db, input).await
}

/// Sets up a test environment with one client.
/// Returns (db, client) for common test scenarios.
pub async fn setup_with_client() -> Result<(DatabaseConnection, entities::client::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Test", "Client").await?;
    Ok((db, client))
}

/// Builds a case payload with sensible defaults.
///
/// # Defaults
/// * `case_type`: civil
/// * `status`: active
/// * `start_date`: `"2030-01-01"`
pub fn case_input(client_id: &str, title: &str) -> CaseInput {
    CaseInput {
        client_id: client_id.to_string(),
        title: title.to_string(),
        case_number: format!("CV-{}", &new_id()[..8]),
        case_type: CaseType::Civil,
        status: CaseStatus::Active,
        description: None,
        start_date: "2030-01-01".to_string(),
        end_date: None,
        next_hearing: None,
        court_name: None,
        judge_name: None,
        opposing_party: None,
        case_value: None,
        hourly_rate: None,
        total_hours: None,
        notes: None,
    }
}

/// Creates a test case with a specific status.
pub async fn create_custom_case(
    db: &DatabaseConnection,
    client_id: &str,
    title: &str,
    status: CaseStatus,
) -> Result<entities::case::Model> {
    let mut input = case_input(client_id, title);
    input.status = status;
    case_ops::create_case(db, input).await
}

/// Sets up a test environment with a client and one active case.
/// Returns (db, client, case) for case-related tests.
pub async fn setup_with_case() -> Result<(
    DatabaseConnection,
    entities::client::Model,
    entities::case::Model,
)> {
    let (db, client) = setup_with_client().await?;
    let case = create_custom_case(&db, &client.id, "Test Case", CaseStatus::Active).await?;
    Ok((db, client, case))
}

/// Builds an appointment payload for `date` (`YYYY-MM-DD`).
pub fn appointment_input(client_id: &str, date: &str) -> AppointmentInput {
    AppointmentInput {
        client_id: client_id.to_string(),
        case_id: None,
        title: "Consultation".to_string(),
        description: None,
        appointment_date: date.to_string(),
        appointment_time: "10:00".to_string(),
        duration_minutes: 60,
        location: None,
        notes: None,
    }
}

/// Fixed reference instant for tests that depend on ordering by creation time.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Shorthand for a duration in minutes.
pub fn minutes(n: i64) -> Duration {
    Duration::minutes(n)
}

/// Inserts a case update with an explicit creation time.
///
/// The API always stamps `now`; ordering tests need control over it.
pub async fn insert_case_update_at(
    db: &DatabaseConnection,
    case: &entities::case::Model,
    title: &str,
    visible: bool,
    at: DateTime<Utc>,
) -> Result<entities::case_update::Model> {
    let update = entities::case_update::ActiveModel {
        id: Set(new_id()),
        case_id: Set(case.id.clone()),
        client_id: Set(case.client_id.clone()),
        title: Set(title.to_string()),
        description: Set(format!("{title} details")),
        update_type: Set("general".to_string()),
        is_visible_to_client: Set(visible),
        created_at: Set(at),
        created_by: Set("lawyer".to_string()),
    };
    Ok(update.insert(db).await?)
}

/// Builds an upload of `bytes` named `name` for `client_id`.
pub fn test_upload(client_id: &str, name: &str, bytes: &[u8]) -> DocumentUpload {
    DocumentUpload {
        client_id: client_id.to_string(),
        case_id: None,
        description: None,
        category: None,
        original_filename: name.to_string(),
        content_type: "application/octet-stream".to_string(),
        bytes: bytes.to_vec(),
    }
}
