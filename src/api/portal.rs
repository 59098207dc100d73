//! Read-model endpoints: practice statistics and the client portal.

use super::ApiState;
use crate::{
    core::{
        dashboard::{self, DashboardStats},
        portal::{self, CaseTimeline, ClientDashboard, ClientLogin, LoginSuccess},
    },
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// `GET /api/dashboard/stats`
pub async fn dashboard_stats(State(state): State<ApiState>) -> Result<Json<DashboardStats>> {
    dashboard::get_dashboard_stats(&state.db).await.map(Json)
}

/// `POST /api/client/login`
pub async fn login(
    State(state): State<ApiState>,
    Json(credentials): Json<ClientLogin>,
) -> Result<Json<LoginSuccess>> {
    portal::authenticate_client(&state.db, &credentials)
        .await
        .map(Json)
}

/// `GET /api/client/dashboard/{client_id}`
pub async fn client_dashboard(
    State(state): State<ApiState>,
    Path(client_id): Path<String>,
) -> Result<Json<ClientDashboard>> {
    portal::get_client_dashboard(&state.db, &client_id)
        .await
        .map(Json)
}

/// `GET /api/client/{client_id}/case-timeline/{case_id}`
pub async fn case_timeline(
    State(state): State<ApiState>,
    Path((client_id, case_id)): Path<(String, String)>,
) -> Result<Json<CaseTimeline>> {
    portal::get_case_timeline(&state.db, &client_id, &case_id)
        .await
        .map(Json)
}
