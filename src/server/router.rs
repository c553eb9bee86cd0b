//! Router assembly for resource and health routes

use crate::config::AppConfig;
use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use crate::entities::{Invoice, Payment};
use crate::server::handlers::{self, AppState};
use crate::storage::sqlite::SqliteStore;
use anyhow::Result;
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the CRUD routes for one resource type under `/v1/{plural}`.
pub fn resource_routes<T: Resource>(state: AppState<T>) -> Router {
    let collection = format!("/v1/{}", T::PLURAL);
    let item = format!("/v1/{}/{{id}}", T::PLURAL);

    Router::new()
        .route(
            &collection,
            post(handlers::create::<T>)
                .get(handlers::list::<T>)
                .head(handlers::head_stub)
                .options(handlers::options_stub),
        )
        .route(
            &item,
            get(handlers::fetch::<T>)
                .put(handlers::update::<T>)
                .delete(handlers::remove::<T>)
                .patch(handlers::patch_stub),
        )
        .with_state(state)
}

/// Build health check routes.
pub fn health_routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .with_state(config)
}

/// Health check endpoint handler
async fn health_check(State(config): State<Arc<AppConfig>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": config.display_name(),
    }))
}

/// Build the full application router: health routes plus both resources,
/// wrapped in request tracing. Table migrations run here.
pub async fn build_app(config: Arc<AppConfig>, pool: SqlitePool) -> Result<Router> {
    let invoices = SqliteStore::<Invoice>::new(pool.clone()).await?;
    let payments = SqliteStore::<Payment>::new(pool).await?;

    let app = health_routes(config.clone())
        .merge(resource_routes(AppState::new(
            ResourceService::new(Arc::new(invoices)),
            config.clone(),
        )))
        .merge(resource_routes(AppState::new(
            ResourceService::new(Arc::new(payments)),
            config,
        )))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
