//! Case update entity - A progress entry on a case.
//!
//! `client_id` is copied from the parent case when the update is created and
//! is never re-derived afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Case update database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_updates")]
pub struct Model {
    /// Business identifier (UUID v4)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Case this update belongs to
    #[sea_orm(indexed)]
    pub case_id: String,
    /// Owner of the case at the time the update was written
    #[sea_orm(indexed)]
    pub client_id: String,
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Kind of update: `"progress"`, `"hearing"`, `"document"`, `"status_change"` or `"general"`
    pub update_type: String,
    /// Whether the client portal may show this update
    #[sea_orm(indexed)]
    pub is_visible_to_client: bool,
    /// When the update was written
    pub created_at: DateTimeUtc,
    /// Author: `"lawyer"` or `"system"`
    pub created_by: String,
}

/// Case update has no declared relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
