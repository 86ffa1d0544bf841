//! Cndie's iPhone Collection storefront
//!
//! A single server-rendered page listing the Pre-Owned and First Hand
//! catalogs from `cndie-core`.
//!
//! ## Rendering
//!
//! - **Server-side HTML**: the page is composed in Rust, one card per product
//! - **Local image fallback**: each card carries its placeholder in an inert
//!   `<template>` and swaps it in from the image's `onerror`, no request
//! - **No client state** beyond each card's image-failed flag

pub mod card;
pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;
pub mod templates;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{Result, WebError};
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/catalog", get(handlers::api_catalog))
        .route("/static/style.css", get(handlers::style_css))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    tracing::info!("Storefront listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
