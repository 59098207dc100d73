//! Database configuration module for `LegalDesk`.
//!
//! This module opens the `SeaORM` connection and creates every table and
//! secondary index from the entity definitions, so the schema always matches the
//! Rust structs without hand-written SQL. Creation is idempotent: restarting the
//! server against an existing database file leaves it untouched.

use crate::entities::{Appointment, Case, CaseUpdate, Client, Document};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default location of the `SQLite` database when nothing is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/legaldesk.sqlite?mode=rwc";

/// Establishes the process-wide connection pool for `database_url`.
///
/// The returned handle is cheap to clone and safe to share between request tasks.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = sqlite_file_parent(database_url) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Directory holding the database file of a file-backed `SQLite` URL.
fn sqlite_file_parent(database_url: &str) -> Option<&Path> {
    let path = database_url.strip_prefix("sqlite://")?;
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// Creates all tables and their indexes if they do not exist yet.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_entity_table(db, &schema, Client).await?;
    create_entity_table(db, &schema, Case).await?;
    create_entity_table(db, &schema, Document).await?;
    create_entity_table(db, &schema, Appointment).await?;
    create_entity_table(db, &schema, CaseUpdate).await?;

    info!("Database tables and indexes ensured");
    Ok(())
}

async fn create_entity_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(builder.build(&index)).await?;
    }

    debug!(table = entity.table_name(), "Table ensured");
    Ok(())
}
