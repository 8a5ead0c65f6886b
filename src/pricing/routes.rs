//! JSON API routes for the quote engine.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::{CarrierTariffsResponse, PricingErrorResponse, QuoteResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/tariffs", get(tariffs))
}

/// POST /api/pricing/quote
async fn quote(Json(req): Json<QuoteRequest>) -> impl IntoResponse {
    let tv_count = req.tv_count;
    match services::quote(&req.into()) {
        Ok(breakdown) => {
            Json(QuoteResponse::from_breakdown(&breakdown, tv_count)).into_response()
        }
        Err(e) => {
            tracing::warn!("Quote rejected: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(PricingErrorResponse {
                    error_type: e.kind().to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/pricing/tariffs
async fn tariffs() -> Json<Vec<CarrierTariffsResponse>> {
    Json(
        services::tariff_catalog()
            .into_iter()
            .map(Into::into)
            .collect(),
    )
}
