//! Appointment endpoints.

use super::{ApiState, MessageResponse};
use crate::{
    core::appointment::{self, AppointmentFilter, AppointmentInput},
    entities::AppointmentModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

/// Query of `PUT /api/appointments/{id}/complete`
#[derive(Debug, Default, Deserialize)]
pub struct CompleteQuery {
    /// Replacement notes
    pub notes: Option<String>,
}

/// `POST /api/appointments`
pub async fn create_appointment(
    State(state): State<ApiState>,
    Json(input): Json<AppointmentInput>,
) -> Result<Json<AppointmentModel>> {
    appointment::create_appointment(&state.db, input)
        .await
        .map(Json)
}

/// `GET /api/appointments?client_id=&upcoming=`
pub async fn list_appointments(
    State(state): State<ApiState>,
    Query(filter): Query<AppointmentFilter>,
) -> Result<Json<Vec<AppointmentModel>>> {
    appointment::list_appointments(&state.db, &filter)
        .await
        .map(Json)
}

/// `PUT /api/appointments/{id}`
pub async fn update_appointment(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(input): Json<AppointmentInput>,
) -> Result<Json<AppointmentModel>> {
    appointment::update_appointment(&state.db, &id, input)
        .await
        .map(Json)
}

/// `PUT /api/appointments/{id}/complete?notes=`
pub async fn complete_appointment(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<CompleteQuery>,
) -> Result<Json<AppointmentModel>> {
    appointment::complete_appointment(&state.db, &id, query.notes)
        .await
        .map(Json)
}

/// `DELETE /api/appointments/{id}`
pub async fn delete_appointment(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    appointment::delete_appointment(&state.db, &id).await?;
    Ok(MessageResponse::json("Appointment deleted successfully"))
}
