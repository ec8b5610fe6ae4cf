//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the in-memory currency store
//! - Shared application state
//! - Error-to-response mapping

pub mod routes;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ratehub_core::CurrencyStore;
use ratehub_shared::AppError;

/// Application state shared across handlers.
///
/// The store owns its own lock, so handlers only need a shared reference.
#[derive(Clone, Default)]
pub struct AppState {
    /// In-memory currency store.
    pub store: Arc<CurrencyStore>,
}

impl AppState {
    /// Creates state with a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Maps an [`AppError`] to the standard error response shape.
pub(crate) fn error_response(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code().to_ascii_lowercase(),
            "message": error.message(),
        })),
    )
        .into_response()
}
