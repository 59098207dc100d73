//! Core business logic - framework-agnostic operations over the entity store.
//!
//! The CRUD modules are thin wrappers around `SeaORM` queries with explicit
//! existence checks. [`dashboard`] and [`portal`] hold the read model that
//! composes several collections into one response.

/// Appointment scheduling and completion
pub mod appointment;
/// Case management
pub mod case;
/// Progress updates written on cases
pub mod case_update;
/// Client management
pub mod client;
/// Practice-wide statistics
pub mod dashboard;
/// Document uploads and their stored bytes
pub mod document;
/// Client portal: login, personal dashboard and case timeline
pub mod portal;

use chrono::{NaiveDate, Utc};

/// Upper bound on rows returned by the staff-side list operations.
pub const LIST_LIMIT: u64 = 1000;

/// Generates a fresh business identifier.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's calendar date in UTC.
#[must_use]
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// ISO 8601 form (`YYYY-MM-DD`) used for appointment date comparisons.
pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
