//! HTTP routes under `/api`.

mod calculators;
mod convert;
mod finance;
mod health;

use axum::{Router, routing::get};

use crate::app::AppState;
use crate::error::ApiError;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/search", get(calculators::search))
        .route("/calculators", get(calculators::list))
        .route("/calculators/:id", get(calculators::get_one))
        .route("/units", get(convert::units))
        .route("/convert", get(convert::convert))
        .route("/convert/reference", get(convert::reference))
        .route("/finance/cagr", get(finance::cagr))
        .route("/finance/simple-interest", get(finance::simple_interest))
        .route("/finance/compound-interest", get(finance::compound_interest))
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such endpoint".to_string())
}

/// Returns the trimmed value of a required query parameter.
fn required<'a>(
    value: &'a Option<String>,
    name: &str,
) -> Result<&'a str, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing(name)),
    }
}
