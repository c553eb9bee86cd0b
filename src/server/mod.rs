//! HTTP server: generic resource handlers, router assembly, serving

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::{build_app, health_routes, resource_routes};

use crate::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Connect to storage, build the router, and serve until shutdown.
pub async fn serve(config: AppConfig) -> Result<()> {
    let pool = crate::storage::sqlite::connect(&config.database_path).await?;
    let config = Arc::new(config);
    let app = build_app(config.clone(), pool).await?;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
