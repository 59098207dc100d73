//! Case update business logic - Progress entries written by the practice on a case.
//!
//! Each update copies its case's `client_id` at creation time so the portal can
//! query a client's updates directly. The copy is never refreshed.

use crate::{
    core::{LIST_LIMIT, case::get_case, new_id},
    entities::{CaseUpdate, case_update},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;

/// Author recorded on updates written through the API.
pub const LAWYER_AUTHOR: &str = "lawyer";

fn default_update_type() -> String {
    "general".to_string()
}

const fn default_visible() -> bool {
    true
}

/// Fields supplied when writing a case update
#[derive(Debug, Clone, Deserialize)]
pub struct CaseUpdateInput {
    /// Case the update belongs to; must exist
    pub case_id: String,
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Kind of update, `"general"` when omitted
    #[serde(default = "default_update_type")]
    pub update_type: String,
    /// Whether the client may see it, true when omitted
    #[serde(default = "default_visible")]
    pub is_visible_to_client: bool,
}

/// Optional filters for [`list_case_updates`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseUpdateFilter {
    /// Only updates of this case
    pub case_id: Option<String>,
    /// Only updates of this client
    pub client_id: Option<String>,
}

/// The "visible to the client" predicate shared by every portal view.
#[must_use]
pub fn visible_to_client() -> sea_orm::Condition {
    sea_orm::Condition::all().add(case_update::Column::IsVisibleToClient.eq(true))
}

/// Writes an update on an existing case, copying the case's `client_id`.
pub async fn create_case_update(
    db: &DatabaseConnection,
    input: CaseUpdateInput,
) -> Result<case_update::Model> {
    let case = get_case(db, &input.case_id).await?;

    let update = case_update::ActiveModel {
        id: Set(new_id()),
        case_id: Set(input.case_id),
        client_id: Set(case.client_id),
        title: Set(input.title),
        description: Set(input.description),
        update_type: Set(input.update_type),
        is_visible_to_client: Set(input.is_visible_to_client),
        created_at: Set(chrono::Utc::now()),
        created_by: Set(LAWYER_AUTHOR.to_string()),
    };

    let result = update.insert(db).await?;
    tracing::info!(
        update_id = %result.id,
        case_id = %result.case_id,
        visible = result.is_visible_to_client,
        "Case update created"
    );
    Ok(result)
}

/// Lists updates newest first, hidden ones included.
///
/// This is the staff-side view; portal views go through [`crate::core::portal`].
pub async fn list_case_updates(
    db: &DatabaseConnection,
    filter: &CaseUpdateFilter,
) -> Result<Vec<case_update::Model>> {
    let mut query = CaseUpdate::find();

    if let Some(case_id) = &filter.case_id {
        query = query.filter(case_update::Column::CaseId.eq(case_id.as_str()));
    }
    if let Some(client_id) = &filter.client_id {
        query = query.filter(case_update::Column::ClientId.eq(client_id.as_str()));
    }

    query
        .order_by_desc(case_update::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes a case update.
pub async fn delete_case_update(db: &DatabaseConnection, update_id: &str) -> Result<()> {
    let result = CaseUpdate::delete_by_id(update_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CaseUpdateNotFound {
            id: update_id.to_string(),
        });
    }
    Ok(())
}
