//! Document entity - Metadata for an uploaded file.
//!
//! The bytes live in the uploads directory under `filename`; this row records
//! where they are and who they belong to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Business identifier (UUID v4)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Owning client
    #[sea_orm(indexed)]
    pub client_id: String,
    /// Case the document was filed under, if any
    #[sea_orm(indexed)]
    pub case_id: Option<String>,
    /// Generated name of the stored file
    pub filename: String,
    /// Name of the file as uploaded
    pub original_filename: String,
    /// Full path of the stored file
    pub file_path: String,
    /// Size in bytes
    pub file_size: i64,
    /// MIME type reported by the uploader
    pub content_type: String,
    /// Staff description
    pub description: Option<String>,
    /// Staff category label
    pub category: Option<String>,
    /// When the file was uploaded
    pub uploaded_at: DateTimeUtc,
}

/// Document has no declared relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
