//! Client endpoints.

use super::{ApiState, MessageResponse};
use crate::{
    core::client::{self, ClientFilter, ClientInput},
    entities::ClientModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// `POST /api/clients`
pub async fn create_client(
    State(state): State<ApiState>,
    Json(input): Json<ClientInput>,
) -> Result<Json<ClientModel>> {
    client::create_client(&state.db, input).await.map(Json)
}

/// `GET /api/clients?status=&search=`
pub async fn list_clients(
    State(state): State<ApiState>,
    Query(filter): Query<ClientFilter>,
) -> Result<Json<Vec<ClientModel>>> {
    client::list_clients(&state.db, &filter).await.map(Json)
}

/// `GET /api/clients/{id}`
pub async fn get_client(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ClientModel>> {
    client::get_client(&state.db, &id).await.map(Json)
}

/// `PUT /api/clients/{id}`
pub async fn update_client(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(input): Json<ClientInput>,
) -> Result<Json<ClientModel>> {
    client::update_client(&state.db, &id, input).await.map(Json)
}

/// `DELETE /api/clients/{id}`
pub async fn delete_client(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    client::delete_client(&state.db, &id).await?;
    Ok(MessageResponse::json("Client deleted successfully"))
}
