//! Case entity - A legal matter handled for one client.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress state of a case.
///
/// `OnHold` cases count toward the dashboard total but fall in none of the
/// named status buckets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Being worked on
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    /// Waiting on an external event
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Finished
    #[sea_orm(string_value = "closed")]
    Closed,
    /// Paused by the practice
    #[sea_orm(string_value = "on_hold")]
    OnHold,
}

/// Area of law a case belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    /// Civil litigation
    #[sea_orm(string_value = "civil")]
    Civil,
    /// Criminal defence
    #[sea_orm(string_value = "criminal")]
    Criminal,
    /// Family law
    #[sea_orm(string_value = "family")]
    Family,
    /// Corporate work
    #[sea_orm(string_value = "corporate")]
    Corporate,
    /// Real estate
    #[sea_orm(string_value = "real_estate")]
    RealEstate,
    /// Immigration
    #[sea_orm(string_value = "immigration")]
    Immigration,
    /// Anything else
    #[sea_orm(string_value = "other")]
    Other,
}

/// Case database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    /// Business identifier (UUID v4)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning client
    #[sea_orm(indexed)]
    pub client_id: String,
    /// Short title shown in lists
    pub title: String,
    /// Court or internal reference number
    pub case_number: String,
    /// Area of law
    pub case_type: CaseType,
    /// Progress state
    #[sea_orm(indexed)]
    pub status: CaseStatus,
    /// Longer description
    pub description: Option<String>,
    /// When work on the case started
    pub start_date: String,
    /// When the case ended
    pub end_date: Option<String>,
    /// Next scheduled hearing
    pub next_hearing: Option<String>,
    /// Court handling the case
    pub court_name: Option<String>,
    /// Presiding judge
    pub judge_name: Option<String>,
    /// Opposing party
    pub opposing_party: Option<String>,
    /// Amount in dispute
    pub case_value: Option<f64>,
    /// Billing rate
    pub hourly_rate: Option<f64>,
    /// Hours billed so far
    pub total_hours: Option<f64>,
    /// Free-form staff notes
    pub notes: Option<String>,
    /// When the case was created
    pub created_at: DateTimeUtc,
    /// When the case was last modified
    pub updated_at: DateTimeUtc,
}

/// Case has no declared relations; `client_id` is an unconstrained reference
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
