//! Server entry point.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tvnet_web::config::Config;
use tvnet_web::{qr, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();
    let contact_qr = qr::data_uri(&config.site.blog_url)?;

    let state = AppState {
        site: config.site,
        contact_qr,
    };
    let app = tvnet_web::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
