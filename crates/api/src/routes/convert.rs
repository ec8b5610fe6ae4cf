//! Currency conversion route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{AppState, error_response};
use ratehub_core::ConvertError;
use ratehub_shared::AppError;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", post(convert_currency))
}

/// Request body for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount in the source currency, as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Response for a conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Amount in the target currency, rounded to 4 decimal places.
    #[serde(rename = "convertedAmount", with = "rust_decimal::serde::float")]
    pub converted_amount: Decimal,
}

/// POST `/convert` - Convert an amount between two stored currencies.
///
/// Pivots through USD: `(amount / from_rate) * to_rate`. A code that is not
/// stored, or stored with a rate of exactly zero, yields 400 without any
/// computation.
async fn convert_currency(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return error_response(&AppError::Validation(rejection.body_text()));
        }
    };

    match state
        .store
        .convert(&request.from, &request.to, request.amount)
    {
        Ok(converted_amount) => (
            StatusCode::OK,
            Json(ConvertResponse { converted_amount }),
        )
            .into_response(),
        Err(ConvertError::UnknownCurrency(code)) => {
            warn!(code = %code, from = %request.from, to = %request.to, "Conversion rejected");
            error_response(&AppError::Validation("Invalid currency code".to_string()))
        }
    }
}
