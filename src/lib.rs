//! TVNet business IPTV quote calculator.
//!
//! Server-rendered single page: a quote form, an itemized monthly
//! breakdown, and a small JSON API over the same tariff tables.

pub mod config;
pub mod error;
pub mod pricing;
pub mod qr;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use config::SiteSettings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub site: SiteSettings,
    /// Contact QR code as a base64 PNG data URI, rendered once at startup
    pub contact_qr: String,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::calculator::page))
        .route("/calculate", post(routes::calculator::calculate))
        .route("/health", get(routes::health))
        .nest("/api/pricing", pricing::router())
        .nest_service("/static", ServeDir::new("static"))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
