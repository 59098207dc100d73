//! Appointment entity - A scheduled meeting with a client.
//!
//! `appointment_date` is stored as an ISO `YYYY-MM-DD` string, which keeps
//! "is it upcoming" a plain string comparison against today's date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Appointment database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    /// Business identifier (UUID v4)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Client the appointment is with
    #[sea_orm(indexed)]
    pub client_id: String,
    /// Related case, if any
    pub case_id: Option<String>,
    /// Short title
    pub title: String,
    /// Agenda
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    #[sea_orm(indexed)]
    pub appointment_date: String,
    /// Time of day as entered by staff
    pub appointment_time: String,
    /// Planned length
    pub duration_minutes: i32,
    /// Where it takes place
    pub location: Option<String>,
    /// Set once the meeting has happened
    pub is_completed: bool,
    /// Staff notes, replaced on completion when notes are supplied
    pub notes: Option<String>,
    /// When the appointment was created
    pub created_at: DateTimeUtc,
}

/// Appointment has no declared relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
