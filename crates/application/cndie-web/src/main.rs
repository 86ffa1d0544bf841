//! Cndie's iPhone Collection - storefront server
//!
//! ## Usage
//!
//! ```bash
//! cndie-web                     # Start on default port 3000
//! cndie-web --port 8080         # Custom port
//! cndie-web --host 0.0.0.0      # Listen on all interfaces
//! ```

use clap::Parser;
use cndie_web::{serve, AppState, ServerConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> cndie_web::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cndie_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();

    tracing::info!(
        products = cndie_core::all_products().count(),
        "Starting storefront"
    );
    cndie_web::routes::print_routes(&addr);

    let state = Arc::new(AppState::new());
    serve(state, &addr).await
}
