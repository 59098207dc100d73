//! Client entity - A person or organisation the practice represents.
//!
//! Clients own cases, documents, appointments and case updates through their
//! `client_id` columns. Deleting a client does not touch those rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Relationship state of a client with the practice
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    /// Currently represented
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    /// Former client
    #[sea_orm(string_value = "inactive")]
    Inactive,
    /// Prospect, not yet engaged
    #[sea_orm(string_value = "potential")]
    Potential,
}

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Business identifier (UUID v4), assigned once at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email, unique across clients and used for portal login
    #[sea_orm(unique)]
    pub email: String,
    /// Contact phone, doubles as the portal password
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// Date of birth as entered by staff
    pub date_of_birth: Option<String>,
    /// Occupation
    pub occupation: Option<String>,
    /// Emergency contact name
    pub emergency_contact: Option<String>,
    /// Emergency contact phone
    pub emergency_phone: Option<String>,
    /// Relationship state
    #[sea_orm(indexed)]
    pub status: ClientStatus,
    /// Free-form staff notes
    pub notes: Option<String>,
    /// Lowercased name, email and phone matched by the client search.
    /// Rewritten on every create and update; never sent to API callers.
    #[serde(skip)]
    pub search_key: String,
    /// When the client was created
    pub created_at: DateTimeUtc,
    /// When the client was last modified
    pub updated_at: DateTimeUtc,
}

/// Client has no declared relations.
///
/// Dependents reference clients through plain `client_id` columns without
/// foreign-key constraints, so deleting a client leaves them orphaned.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
