//! Client portal read model.
//!
//! Everything here is what a client sees about themselves: their dashboard and
//! the timeline of one of their cases. Both views only ever include case
//! updates flagged visible to the client. Existence and ownership checks run
//! first and fail before any other query is issued.

use crate::{
    core::{
        appointment::upcoming_condition, case_update::visible_to_client, client::get_client,
        today_utc,
    },
    entities::{
        Appointment, Case, CaseStatus, CaseUpdate, Client, Document, appointment, case,
        case_update, client, document,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Most recent visible updates shown on a client dashboard.
pub const RECENT_UPDATES_LIMIT: u64 = 10;
/// Upcoming appointments shown on a client dashboard.
pub const UPCOMING_APPOINTMENTS_LIMIT: u64 = 5;

/// Portal login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct ClientLogin {
    /// Client email
    pub email: String,
    /// Client phone, used as the password
    pub phone: String,
}

/// Identity returned after a successful portal login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccess {
    /// Fixed confirmation message
    pub message: String,
    /// Identifier to use for the portal endpoints
    pub client_id: String,
    /// "First Last"
    pub client_name: String,
}

/// A client's personalised dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDashboard {
    /// The client record
    pub client_info: client::Model,
    /// Active and pending cases, newest first
    pub active_cases: Vec<case::Model>,
    /// Visible case updates, newest first, at most [`RECENT_UPDATES_LIMIT`]
    pub recent_updates: Vec<case_update::Model>,
    /// Upcoming appointments, soonest first, at most [`UPCOMING_APPOINTMENTS_LIMIT`]
    pub upcoming_appointments: Vec<appointment::Model>,
    /// Number of documents on file for the client
    pub total_documents: u64,
}

/// Client view of one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTimeline {
    /// The case record
    pub case: case::Model,
    /// Visible updates, newest first
    pub updates: Vec<case_update::Model>,
    /// Appointments for the case, latest date first
    pub appointments: Vec<appointment::Model>,
    /// Documents filed under the case, newest first
    pub documents: Vec<document::Model>,
}

/// Checks portal credentials: email and phone must both match one client.
pub async fn authenticate_client(db: &DatabaseConnection, login: &ClientLogin) -> Result<LoginSuccess> {
    let client = Client::find()
        .filter(client::Column::Email.eq(login.email.as_str()))
        .filter(client::Column::Phone.eq(login.phone.as_str()))
        .one(db)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    tracing::info!(client_id = %client.id, "Client portal login");
    Ok(LoginSuccess {
        message: "Login successful".to_string(),
        client_name: format!("{} {}", client.first_name, client.last_name),
        client_id: client.id,
    })
}

/// Builds the portal dashboard of `client_id` for the current UTC date.
pub async fn get_client_dashboard(db: &DatabaseConnection, client_id: &str) -> Result<ClientDashboard> {
    get_client_dashboard_as_of(db, client_id, today_utc()).await
}

/// Builds the portal dashboard of `client_id` treating `today` as the current date.
#[instrument(skip(db))]
pub async fn get_client_dashboard_as_of(
    db: &DatabaseConnection,
    client_id: &str,
    today: NaiveDate,
) -> Result<ClientDashboard> {
    let client_info = get_client(db, client_id).await?;

    let (active_cases, recent_updates, upcoming_appointments, total_documents) = tokio::try_join!(
        Case::find()
            .filter(case::Column::ClientId.eq(client_id))
            .filter(case::Column::Status.is_in([CaseStatus::Active, CaseStatus::Pending]))
            .order_by_desc(case::Column::CreatedAt)
            .all(db),
        CaseUpdate::find()
            .filter(case_update::Column::ClientId.eq(client_id))
            .filter(visible_to_client())
            .order_by_desc(case_update::Column::CreatedAt)
            .limit(RECENT_UPDATES_LIMIT)
            .all(db),
        Appointment::find()
            .filter(appointment::Column::ClientId.eq(client_id))
            .filter(upcoming_condition(today))
            .order_by_asc(appointment::Column::AppointmentDate)
            .limit(UPCOMING_APPOINTMENTS_LIMIT)
            .all(db),
        Document::find()
            .filter(document::Column::ClientId.eq(client_id))
            .count(db),
    )?;

    debug!(
        cases = active_cases.len(),
        updates = recent_updates.len(),
        appointments = upcoming_appointments.len(),
        documents = total_documents,
        "Client dashboard assembled"
    );

    Ok(ClientDashboard {
        client_info,
        active_cases,
        recent_updates,
        upcoming_appointments,
        total_documents,
    })
}

/// Builds the client view of one case.
///
/// The case must exist *and* belong to `client_id`; otherwise the call fails
/// with [`Error::CaseAccessDenied`] whichever of the two was wrong. The
/// dependent lists are filtered by both the case and the client, so a record
/// with a mismatched `client_id` never leaks into another client's timeline.
#[instrument(skip(db))]
pub async fn get_case_timeline(
    db: &DatabaseConnection,
    client_id: &str,
    case_id: &str,
) -> Result<CaseTimeline> {
    let case = Case::find()
        .filter(case::Column::Id.eq(case_id))
        .filter(case::Column::ClientId.eq(client_id))
        .one(db)
        .await?
        .ok_or_else(|| Error::CaseAccessDenied {
            client_id: client_id.to_string(),
            case_id: case_id.to_string(),
        })?;

    let (updates, appointments, documents) = tokio::try_join!(
        CaseUpdate::find()
            .filter(case_update::Column::CaseId.eq(case_id))
            .filter(case_update::Column::ClientId.eq(client_id))
            .filter(visible_to_client())
            .order_by_desc(case_update::Column::CreatedAt)
            .all(db),
        Appointment::find()
            .filter(appointment::Column::CaseId.eq(case_id))
            .filter(appointment::Column::ClientId.eq(client_id))
            .order_by_desc(appointment::Column::AppointmentDate)
            .all(db),
        Document::find()
            .filter(document::Column::CaseId.eq(case_id))
            .filter(document::Column::ClientId.eq(client_id))
            .order_by_desc(document::Column::UploadedAt)
            .all(db),
    )?;

    Ok(CaseTimeline {
        case,
        updates,
        appointments,
        documents,
    })
}
