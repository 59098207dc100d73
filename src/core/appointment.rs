//! Appointment business logic - Scheduling, editing and completing client meetings.
//!
//! Dates are kept as ISO `YYYY-MM-DD` strings and validated on the way in, so the
//! "upcoming" predicate can stay a lexicographic `>=` against today's date.

use crate::{
    core::{LIST_LIMIT, client::get_client, iso_date, new_id, today_utc},
    entities::{Appointment, appointment},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;

const fn default_duration() -> i32 {
    60
}

/// Editable appointment fields, used for both creation and full replacement
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentInput {
    /// Client the appointment is with; must exist when it is created
    pub client_id: String,
    /// Related case
    #[serde(default)]
    pub case_id: Option<String>,
    /// Short title
    pub title: String,
    /// Agenda
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub appointment_date: String,
    /// Time of day
    pub appointment_time: String,
    /// Planned length, 60 minutes when omitted
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    /// Where it takes place
    #[serde(default)]
    pub location: Option<String>,
    /// Staff notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Optional filters for [`list_appointments`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    /// Only appointments with this client
    pub client_id: Option<String>,
    /// Only upcoming appointments when true
    #[serde(default)]
    pub upcoming: Option<bool>,
}

/// The "upcoming" predicate: dated today or later and not yet completed.
#[must_use]
pub fn upcoming_condition(today: NaiveDate) -> Condition {
    Condition::all()
        .add(appointment::Column::AppointmentDate.gte(iso_date(today)))
        .add(appointment::Column::IsCompleted.eq(false))
}

fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| Error::validation(format!("appointment_date must be YYYY-MM-DD, got '{date}'")))
}

/// Schedules an appointment after checking the client exists.
pub async fn create_appointment(
    db: &DatabaseConnection,
    input: AppointmentInput,
) -> Result<appointment::Model> {
    validate_date(&input.appointment_date)?;
    get_client(db, &input.client_id).await?;

    let appointment = appointment::ActiveModel {
        id: Set(new_id()),
        client_id: Set(input.client_id),
        case_id: Set(input.case_id),
        title: Set(input.title),
        description: Set(input.description),
        appointment_date: Set(input.appointment_date),
        appointment_time: Set(input.appointment_time),
        duration_minutes: Set(input.duration_minutes),
        location: Set(input.location),
        is_completed: Set(false),
        notes: Set(input.notes),
        created_at: Set(chrono::Utc::now()),
    };

    let result = appointment.insert(db).await?;
    tracing::info!(
        appointment_id = %result.id,
        date = %result.appointment_date,
        "Appointment created"
    );
    Ok(result)
}

/// Lists appointments soonest first.
pub async fn list_appointments(
    db: &DatabaseConnection,
    filter: &AppointmentFilter,
) -> Result<Vec<appointment::Model>> {
    list_appointments_as_of(db, filter, today_utc()).await
}

/// Same as [`list_appointments`] with an explicit "today" for the upcoming filter.
pub async fn list_appointments_as_of(
    db: &DatabaseConnection,
    filter: &AppointmentFilter,
    today: NaiveDate,
) -> Result<Vec<appointment::Model>> {
    let mut query = Appointment::find();

    if let Some(client_id) = &filter.client_id {
        query = query.filter(appointment::Column::ClientId.eq(client_id.as_str()));
    }
    if filter.upcoming == Some(true) {
        query = query.filter(upcoming_condition(today));
    }

    query
        .order_by_asc(appointment::Column::AppointmentDate)
        .limit(LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads an appointment or fails with [`Error::AppointmentNotFound`].
pub async fn get_appointment<C>(db: &C, appointment_id: &str) -> Result<appointment::Model>
where
    C: ConnectionTrait,
{
    Appointment::find_by_id(appointment_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::AppointmentNotFound {
            id: appointment_id.to_string(),
        })
}

/// Replaces the editable fields of an appointment; completion state is kept.
pub async fn update_appointment(
    db: &DatabaseConnection,
    appointment_id: &str,
    input: AppointmentInput,
) -> Result<appointment::Model> {
    validate_date(&input.appointment_date)?;
    let existing = get_appointment(db, appointment_id).await?;

    let mut appointment: appointment::ActiveModel = existing.into();
    appointment.client_id = Set(input.client_id);
    appointment.case_id = Set(input.case_id);
    appointment.title = Set(input.title);
    appointment.description = Set(input.description);
    appointment.appointment_date = Set(input.appointment_date);
    appointment.appointment_time = Set(input.appointment_time);
    appointment.duration_minutes = Set(input.duration_minutes);
    appointment.location = Set(input.location);
    appointment.notes = Set(input.notes);

    appointment.update(db).await.map_err(Into::into)
}

/// Marks an appointment completed, replacing its notes when non-empty notes are given.
pub async fn complete_appointment(
    db: &DatabaseConnection,
    appointment_id: &str,
    notes: Option<String>,
) -> Result<appointment::Model> {
    let existing = get_appointment(db, appointment_id).await?;

    let mut appointment: appointment::ActiveModel = existing.into();
    appointment.is_completed = Set(true);
    if let Some(notes) = notes.filter(|n| !n.is_empty()) {
        appointment.notes = Set(Some(notes));
    }

    let result = appointment.update(db).await?;
    tracing::info!(appointment_id, "Appointment marked as completed");
    Ok(result)
}

/// Removes an appointment.
pub async fn delete_appointment(db: &DatabaseConnection, appointment_id: &str) -> Result<()> {
    let result = Appointment::delete_by_id(appointment_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::AppointmentNotFound {
            id: appointment_id.to_string(),
        });
    }
    Ok(())
}
