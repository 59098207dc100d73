//! Client business logic - Handles creating, finding, editing and removing clients.
//!
//! Deleting a client leaves its cases, documents, appointments and updates in
//! place; nothing cascades.

use crate::{
    core::{LIST_LIMIT, new_id},
    entities::{Client, ClientStatus, client},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, QuerySelect, Set,
    prelude::*,
    sea_query::{Alias, Expr, Func},
};
use serde::Deserialize;

/// Editable client fields, used for both creation and full replacement
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub postal_code: String,
    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Occupation
    #[serde(default)]
    pub occupation: Option<String>,
    /// Emergency contact name
    #[serde(default)]
    pub emergency_contact: Option<String>,
    /// Emergency contact phone
    #[serde(default)]
    pub emergency_phone: Option<String>,
    /// Relationship state, active when omitted
    #[serde(default)]
    pub status: ClientStatus,
    /// Staff notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Optional filters for [`list_clients`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientFilter {
    /// Only clients in this state
    pub status: Option<ClientStatus>,
    /// Case-insensitive substring of first name, last name, email or phone
    pub search: Option<String>,
}

/// Separates the fields inside a search key so a term cannot match across two of them.
const SEARCH_KEY_SEPARATOR: &str = "\u{1f}";

/// Builds the stored search key from the searchable fields.
///
/// Folding is full Unicode lowercasing done in Rust; search terms are folded
/// with the same `str::to_lowercase` before they are compared.
fn search_key(input: &ClientInput) -> String {
    [
        input.first_name.as_str(),
        input.last_name.as_str(),
        input.email.as_str(),
        input.phone.as_str(),
    ]
    .map(str::to_lowercase)
    .join(SEARCH_KEY_SEPARATOR)
}

/// Creates a client with a new identifier and fresh timestamps.
pub async fn create_client(db: &DatabaseConnection, input: ClientInput) -> Result<client::Model> {
    let now = chrono::Utc::now();
    let client = client::ActiveModel {
        id: Set(new_id()),
        search_key: Set(search_key(&input)),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        phone: Set(input.phone),
        address: Set(input.address),
        city: Set(input.city),
        state: Set(input.state),
        postal_code: Set(input.postal_code),
        date_of_birth: Set(input.date_of_birth),
        occupation: Set(input.occupation),
        emergency_contact: Set(input.emergency_contact),
        emergency_phone: Set(input.emergency_phone),
        status: Set(input.status),
        notes: Set(input.notes),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = client.insert(db).await?;
    tracing::info!(client_id = %result.id, "Client created");
    Ok(result)
}

/// Lists clients newest first, optionally filtered by status and a search term.
pub async fn list_clients(
    db: &DatabaseConnection,
    filter: &ClientFilter,
) -> Result<Vec<client::Model>> {
    let mut query = Client::find();

    if let Some(status) = filter.status {
        query = query.filter(client::Column::Status.eq(status));
    }

    if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        // instr() is a literal substring test, so `%` and `_` carry no meaning
        let position = Func::cust(Alias::new("instr"))
            .arg(Expr::col(client::Column::SearchKey))
            .arg(term.to_lowercase());
        query = query.filter(Expr::expr(position).gt(0));
    }

    query
        .order_by_desc(client::Column::CreatedAt)
        .limit(LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by identifier, returning None if it does not exist.
pub async fn find_client<C>(db: &C, client_id: &str) -> Result<Option<client::Model>>
where
    C: ConnectionTrait,
{
    Client::find_by_id(client_id).one(db).await.map_err(Into::into)
}

/// Loads a client or fails with [`Error::ClientNotFound`].
pub async fn get_client<C>(db: &C, client_id: &str) -> Result<client::Model>
where
    C: ConnectionTrait,
{
    find_client(db, client_id)
        .await?
        .ok_or_else(|| Error::ClientNotFound {
            id: client_id.to_string(),
        })
}

/// Replaces every editable field of a client and bumps `updated_at`.
pub async fn update_client(
    db: &DatabaseConnection,
    client_id: &str,
    input: ClientInput,
) -> Result<client::Model> {
    let existing = get_client(db, client_id).await?;

    let mut client: client::ActiveModel = existing.into();
    client.search_key = Set(search_key(&input));
    client.first_name = Set(input.first_name);
    client.last_name = Set(input.last_name);
    client.email = Set(input.email);
    client.phone = Set(input.phone);
    client.address = Set(input.address);
    client.city = Set(input.city);
    client.state = Set(input.state);
    client.postal_code = Set(input.postal_code);
    client.date_of_birth = Set(input.date_of_birth);
    client.occupation = Set(input.occupation);
    client.emergency_contact = Set(input.emergency_contact);
    client.emergency_phone = Set(input.emergency_phone);
    client.status = Set(input.status);
    client.notes = Set(input.notes);
    client.updated_at = Set(chrono::Utc::now());

    client.update(db).await.map_err(Into::into)
}

/// Removes a client record. Dependent records are left orphaned.
pub async fn delete_client(db: &DatabaseConnection, client_id: &str) -> Result<()> {
    let result = Client::delete_by_id(client_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ClientNotFound {
            id: client_id.to_string(),
        });
    }
    tracing::info!(client_id, "Client deleted");
    Ok(())
}
