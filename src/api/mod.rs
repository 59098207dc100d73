//! HTTP API - axum router over the core operations.
//!
//! Handlers are thin: they extract the request, call into [`crate::core`] and
//! serialise the result. All failures go through [`crate::errors::Error`]'s
//! `IntoResponse` implementation in [`error`].

/// Appointment endpoints
pub mod appointments;
/// Case update endpoints
pub mod case_updates;
/// Case endpoints
pub mod cases;
/// Client endpoints
pub mod clients;
/// Document endpoints
pub mod documents;
/// Error responses
pub mod error;
/// Statistics and client portal endpoints
pub mod portal;

use crate::{config::settings::Settings, core::document::UPLOADS_URL_PREFIX};
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    /// Entity store
    pub db: DatabaseConnection,
    /// Directory uploaded documents are written to
    pub uploads_dir: Arc<PathBuf>,
}

impl ApiState {
    /// Wraps the store handle and uploads directory for sharing across handlers.
    #[must_use]
    pub fn new(db: DatabaseConnection, uploads_dir: PathBuf) -> Self {
        Self {
            db,
            uploads_dir: Arc::new(uploads_dir),
        }
    }
}

/// Confirmation body returned by deletes and the health check
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human readable confirmation
    pub message: &'static str,
}

impl MessageResponse {
    pub(crate) fn json(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

async fn health() -> Json<MessageResponse> {
    MessageResponse::json("ok")
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

/// Builds the full application router.
pub fn build_router(db: DatabaseConnection, settings: &Settings) -> Router {
    let state = ApiState::new(db, settings.uploads_dir.clone());

    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/dashboard/stats", get(portal::dashboard_stats))
        .route(
            "/api/clients",
            post(clients::create_client).get(clients::list_clients),
        )
        .route(
            "/api/clients/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/api/cases", post(cases::create_case).get(cases::list_cases))
        .route(
            "/api/cases/{id}",
            get(cases::get_case)
                .put(cases::update_case)
                .delete(cases::delete_case),
        )
        .route(
            "/api/documents/upload",
            post(documents::upload_document)
                .layer(DefaultBodyLimit::max(settings.max_upload_bytes)),
        )
        .route("/api/documents", get(documents::list_documents))
        .route("/api/documents/{id}", delete(documents::delete_document))
        .route(
            "/api/appointments",
            post(appointments::create_appointment).get(appointments::list_appointments),
        )
        .route(
            "/api/appointments/{id}",
            put(appointments::update_appointment).delete(appointments::delete_appointment),
        )
        .route(
            "/api/appointments/{id}/complete",
            put(appointments::complete_appointment),
        )
        .route(
            "/api/case-updates",
            post(case_updates::create_case_update).get(case_updates::list_case_updates),
        )
        .route(
            "/api/case-updates/{id}",
            delete(case_updates::delete_case_update),
        )
        .route("/api/client/login", post(portal::login))
        .route(
            "/api/client/dashboard/{client_id}",
            get(portal::client_dashboard),
        )
        .route(
            "/api/client/{client_id}/case-timeline/{case_id}",
            get(portal::case_timeline),
        )
        .with_state(state);

    api.nest_service(UPLOADS_URL_PREFIX, ServeDir::new(&settings.uploads_dir))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}
