//! Case endpoints.

use super::{ApiState, MessageResponse};
use crate::{
    core::case::{self, CaseFilter, CaseInput},
    entities::CaseModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// `POST /api/cases`
pub async fn create_case(
    State(state): State<ApiState>,
    Json(input): Json<CaseInput>,
) -> Result<Json<CaseModel>> {
    case::create_case(&state.db, input).await.map(Json)
}

/// `GET /api/cases?client_id=&status=`
pub async fn list_cases(
    State(state): State<ApiState>,
    Query(filter): Query<CaseFilter>,
) -> Result<Json<Vec<CaseModel>>> {
    case::list_cases(&state.db, &filter).await.map(Json)
}

/// `GET /api/cases/{id}`
pub async fn get_case(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<CaseModel>> {
    case::get_case(&state.db, &id).await.map(Json)
}

/// `PUT /api/cases/{id}`
pub async fn update_case(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(input): Json<CaseInput>,
) -> Result<Json<CaseModel>> {
    case::update_case(&state.db, &id, input).await.map(Json)
}

/// `DELETE /api/cases/{id}`
pub async fn delete_case(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    case::delete_case(&state.db, &id).await?;
    Ok(MessageResponse::json("Case deleted successfully"))
}
