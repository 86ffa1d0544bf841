//! Route handlers for the storefront

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

use cndie_core::Catalog;

use crate::page::StorefrontPage;
use crate::state::AppState;
use crate::templates;

// ============== Page Handlers ==============

/// The storefront. Every request mounts a fresh set of cards.
pub async fn index() -> impl IntoResponse {
    Html(StorefrontPage::new().render())
}

// ============== API Handlers ==============

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cndie-web",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs()
    }))
}

/// Both catalogs in display order
pub async fn api_catalog() -> impl IntoResponse {
    let catalogs: Vec<serde_json::Value> = Catalog::ALL
        .iter()
        .map(|catalog| {
            serde_json::json!({
                "slug": catalog.slug(),
                "title": catalog.title(),
                "products": catalog.products()
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": Catalog::ALL.iter().map(|c| c.products().len()).sum::<usize>(),
        "catalogs": catalogs
    }))
}

// ============== Static Assets ==============

/// CSS stylesheet
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        templates::STYLE_CSS,
    )
}
