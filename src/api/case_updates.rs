//! Case update endpoints (practice side; hidden updates are listed too).

use super::{ApiState, MessageResponse};
use crate::{
    core::case_update::{self, CaseUpdateFilter, CaseUpdateInput},
    entities::CaseUpdateModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

/// `POST /api/case-updates`
pub async fn create_case_update(
    State(state): State<ApiState>,
    Json(input): Json<CaseUpdateInput>,
) -> Result<Json<CaseUpdateModel>> {
    case_update::create_case_update(&state.db, input)
        .await
        .map(Json)
}

/// `GET /api/case-updates?case_id=&client_id=`
pub async fn list_case_updates(
    State(state): State<ApiState>,
    Query(filter): Query<CaseUpdateFilter>,
) -> Result<Json<Vec<CaseUpdateModel>>> {
    case_update::list_case_updates(&state.db, &filter)
        .await
        .map(Json)
}

/// `DELETE /api/case-updates/{id}`
pub async fn delete_case_update(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    case_update::delete_case_update(&state.db, &id).await?;
    Ok(MessageResponse::json("Case update deleted successfully"))
}
