//! Case business logic - Cases are opened for an existing client and edited in place.

use crate::{
    core::{LIST_LIMIT, client::get_client, new_id},
    entities::{Case, CaseStatus, CaseType, case},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;

/// Editable case fields, used for both creation and full replacement
#[derive(Debug, Clone, Deserialize)]
pub struct CaseInput {
    /// Owning client; must exist when the case is created
    pub client_id: String,
    /// Short title
    pub title: String,
    /// Court or internal reference number
    pub case_number: String,
    /// Area of law
    pub case_type: CaseType,
    /// Progress state, active when omitted
    #[serde(default)]
    pub status: CaseStatus,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// When work started
    pub start_date: String,
    /// When the case ended
    #[serde(default)]
    pub end_date: Option<String>,
    /// Next scheduled hearing
    #[serde(default)]
    pub next_hearing: Option<String>,
    /// Court handling the case
    #[serde(default)]
    pub court_name: Option<String>,
    /// Presiding judge
    #[serde(default)]
    pub judge_name: Option<String>,
    /// Opposing party
    #[serde(default)]
    pub opposing_party: Option<String>,
    /// Amount in dispute
    #[serde(default)]
    pub case_value: Option<f64>,
    /// Billing rate
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Hours billed so far
    #[serde(default)]
    pub total_hours: Option<f64>,
    /// Staff notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Optional filters for [`list_cases`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseFilter {
    /// Only cases of this client
    pub client_id: Option<String>,
    /// Only cases in this state
    pub status: Option<CaseStatus>,
}

/// Opens a case after checking that its client exists.
pub async fn create_case(db: &DatabaseConnection, input: CaseInput) -> Result<case::Model> {
    get_client(db, &input.client_id).await?;

    let now = chrono::Utc::now();
    let case = case::ActiveModel {
        id: Set(new_id()),
        client_id: Set(input.client_id),
        title: Set(input.title),
        case_number: Set(input.case_number),
        case_type: Set(input.case_type),
        status: Set(input.status),
        description: Set(input.description),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        next_hearing: Set(input.next_hearing),
        court_name: Set(input.court_name),
        judge_name: Set(input.judge_name),
        opposing_party: Set(input.opposing_party),
        case_value: Set(input.case_value),
        hourly_rate: Set(input.hourly_rate),
        total_hours: Set(input.total_hours),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = case.insert(db).await?;
    tracing::info!(case_id = %result.id, client_id = %result.client_id, "Case created");
    Ok(result)
}

/// Lists cases newest first, optionally restricted to a client and/or status.
pub async fn list_cases(db: &DatabaseConnection, filter: &CaseFilter) -> Result<Vec<case::Model>> {
    let mut query = Case::find();

    if let Some(client_id) = &filter.client_id {
        query = query.filter(case::Column::ClientId.eq(client_id.as_str()));
    }
    if let Some(status) = filter.status {
        query = query.filter(case::Column::Status.eq(status));
    }

    query
        .order_by_desc(case::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Loads a case or fails with [`Error::CaseNotFound`].
pub async fn get_case<C>(db: &C, case_id: &str) -> Result<case::Model>
where
    C: ConnectionTrait,
{
    Case::find_by_id(case_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::CaseNotFound {
            id: case_id.to_string(),
        })
}

/// Replaces every editable field of a case and bumps `updated_at`.
///
/// The client reference is replaced as given; existing case updates keep the
/// `client_id` they were written with.
pub async fn update_case(
    db: &DatabaseConnection,
    case_id: &str,
    input: CaseInput,
) -> Result<case::Model> {
    let existing = get_case(db, case_id).await?;

    let mut case: case::ActiveModel = existing.into();
    case.client_id = Set(input.client_id);
    case.title = Set(input.title);
    case.case_number = Set(input.case_number);
    case.case_type = Set(input.case_type);
    case.status = Set(input.status);
    case.description = Set(input.description);
    case.start_date = Set(input.start_date);
    case.end_date = Set(input.end_date);
    case.next_hearing = Set(input.next_hearing);
    case.court_name = Set(input.court_name);
    case.judge_name = Set(input.judge_name);
    case.opposing_party = Set(input.opposing_party);
    case.case_value = Set(input.case_value);
    case.hourly_rate = Set(input.hourly_rate);
    case.total_hours = Set(input.total_hours);
    case.notes = Set(input.notes);
    case.updated_at = Set(chrono::Utc::now());

    case.update(db).await.map_err(Into::into)
}

/// Removes a case record. Its updates, documents and appointments stay.
pub async fn delete_case(db: &DatabaseConnection, case_id: &str) -> Result<()> {
    let result = Case::delete_by_id(case_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CaseNotFound {
            id: case_id.to_string(),
        });
    }
    tracing::info!(case_id, "Case deleted");
    Ok(())
}
