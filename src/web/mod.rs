//! HTTP front end: the page, its assets, and the JSON generation endpoints.

use std::num::NonZeroU16;
use std::sync::Arc;

use axum::Router;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::STATIC_CACHE_CONTROL;
use crate::gateway::BlogGateway;

mod api;
mod prelude;
mod views;

use api::{generate_blog_handler, generate_image_handler};
use views::root_handler;

#[derive(Clone)]
pub(crate) struct AppState {
    gateway: Arc<BlogGateway>,
}

impl AppState {
    fn new(gateway: BlogGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/static/styles.css", get(styles_handler))
        .route("/static/app.js", get(script_handler))
        .route("/api/generate-blog", post(generate_blog_handler))
        .route("/api/generate-image", post(generate_image_handler))
}

async fn styles_handler() -> impl IntoResponse {
    const STYLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/styles.css"));
    (
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL.as_str()),
        ],
        STYLES,
    )
}

async fn script_handler() -> impl IntoResponse {
    const SCRIPT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/app.js"));
    (
        [
            (CONTENT_TYPE, "text/javascript"),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL.as_str()),
        ],
        SCRIPT,
    )
}

/// Builds the full application around a gateway.
pub fn build_app(gateway: BlogGateway) -> Router {
    create_router()
        .with_state(AppState::new(gateway))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until Ctrl-C.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    gateway: BlogGateway,
) -> Result<(), anyhow::Error> {
    let app = build_app(gateway);

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received");
}
