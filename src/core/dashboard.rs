//! Practice-wide dashboard statistics.
//!
//! Eight independent counts, no joins. The counts are issued concurrently on the
//! shared pool without a transaction, so a write landing mid-call may show up in
//! some counts and not others. Any failing count fails the whole call.

use crate::{
    core::{appointment::upcoming_condition, today_utc},
    entities::{Appointment, Case, CaseStatus, Client, ClientStatus, Document, case, client},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, PaginatorTrait, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Snapshot of practice-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Every client
    pub total_clients: u64,
    /// Clients with status active
    pub active_clients: u64,
    /// Every case, on-hold ones included
    pub total_cases: u64,
    /// Cases with status active
    pub active_cases: u64,
    /// Cases with status pending
    pub pending_cases: u64,
    /// Cases with status closed
    pub closed_cases: u64,
    /// Appointments dated today or later that are not completed
    pub upcoming_appointments: u64,
    /// Every document
    pub total_documents: u64,
}

/// Computes dashboard statistics for the current UTC date.
pub async fn get_dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats> {
    get_dashboard_stats_as_of(db, today_utc()).await
}

/// Computes dashboard statistics treating `today` as the current date.
#[instrument(skip(db))]
pub async fn get_dashboard_stats_as_of(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<DashboardStats> {
    let (
        total_clients,
        active_clients,
        total_cases,
        active_cases,
        pending_cases,
        closed_cases,
        upcoming_appointments,
        total_documents,
    ) = tokio::try_join!(
        Client::find().count(db),
        Client::find()
            .filter(client::Column::Status.eq(ClientStatus::Active))
            .count(db),
        Case::find().count(db),
        Case::find()
            .filter(case::Column::Status.eq(CaseStatus::Active))
            .count(db),
        Case::find()
            .filter(case::Column::Status.eq(CaseStatus::Pending))
            .count(db),
        Case::find()
            .filter(case::Column::Status.eq(CaseStatus::Closed))
            .count(db),
        Appointment::find()
            .filter(upcoming_condition(today))
            .count(db),
        Document::find().count(db),
    )?;

    Ok(DashboardStats {
        total_clients,
        active_clients,
        total_cases,
        active_cases,
        pending_cases,
        closed_cases,
        upcoming_appointments,
        total_documents,
    })
}
