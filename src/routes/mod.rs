//! HTTP route handlers

pub mod calculator;

use axum::Json;

/// Liveness endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
