//! Currency CRUD routes.
//!
//! All four verbs operate on `/currencies`; update and delete address the
//! record by the `code` in the request body, not by path parameter, and act
//! on the first match in store order when duplicates exist.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error_response};
use ratehub_core::{Currency, StoreError};
use ratehub_shared::AppError;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/currencies",
        get(list_currencies)
            .post(add_currency)
            .put(update_currency)
            .delete(delete_currency),
    )
}

/// Request body for deleting a currency. Only the code participates in
/// matching; any other fields (e.g. a rate) are ignored.
#[derive(Debug, Deserialize)]
pub struct DeleteCurrencyRequest {
    /// Currency code to delete.
    pub code: String,
}

/// GET `/currencies` - List all currencies in insertion order.
async fn list_currencies(State(state): State<AppState>) -> Json<Vec<Currency>> {
    Json(state.store.list())
}

/// POST `/currencies` - Append a currency record.
///
/// No duplicate-code check and no field validation beyond the body being
/// well-formed JSON of the right shape.
async fn add_currency(
    State(state): State<AppState>,
    payload: Result<Json<Currency>, JsonRejection>,
) -> Response {
    let Json(currency) = match payload {
        Ok(json) => json,
        Err(rejection) => return reject_body(&rejection),
    };

    let stored = state.store.add(currency);
    info!(code = %stored.code, rate = %stored.rate, "Currency added");

    (StatusCode::CREATED, Json(stored)).into_response()
}

/// PUT `/currencies` - Replace the first record matching the body's code.
async fn update_currency(
    State(state): State<AppState>,
    payload: Result<Json<Currency>, JsonRejection>,
) -> Response {
    let Json(currency) = match payload {
        Ok(json) => json,
        Err(rejection) => return reject_body(&rejection),
    };

    match state.store.update(currency) {
        Ok(updated) => {
            info!(code = %updated.code, rate = %updated.rate, "Currency updated");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(StoreError::NotFound(code)) => {
            error_response(&AppError::NotFound(format!("Currency '{code}' not found")))
        }
    }
}

/// DELETE `/currencies` - Remove the first record matching the body's code.
async fn delete_currency(
    State(state): State<AppState>,
    payload: Result<Json<DeleteCurrencyRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return reject_body(&rejection),
    };

    match state.store.remove(&request.code) {
        Ok(()) => {
            info!(code = %request.code, "Currency deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(StoreError::NotFound(code)) => {
            error_response(&AppError::NotFound(format!("Currency '{code}' not found")))
        }
    }
}

/// Maps a body rejection to 400 before any store access.
fn reject_body(rejection: &JsonRejection) -> Response {
    error_response(&AppError::Validation(rejection.body_text()))
}
