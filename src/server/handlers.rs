//! Generic HTTP handlers for resource CRUD operations
//!
//! One handler per operation, written once and instantiated per resource
//! type. Handlers are stateless across requests: decode, validate, delegate
//! to the service, classify the outcome. No retries, no recovery.

use crate::config::AppConfig;
use crate::core::error::{ErrorBody, ResourceError};
use crate::core::resource::Resource;
use crate::core::service::ResourceService;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;
use tracing::{Span, error, instrument};

/// Application state shared by the handlers of one resource type.
pub struct AppState<T: Resource> {
    pub service: ResourceService<T>,
    pub config: Arc<AppConfig>,
}

impl<T: Resource> AppState<T> {
    pub fn new(service: ResourceService<T>, config: Arc<AppConfig>) -> Self {
        Self { service, config }
    }
}

impl<T: Resource> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /v1/{plural}
pub async fn create<T: Resource>(State(state): State<AppState<T>>, body: Bytes) -> Response {
    let input: T = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(err) => {
            let err = ResourceError::Decode(err.to_string());
            error!(resource = T::SINGULAR, %err, "create rejected");
            return err.into_response();
        }
    };

    match state.service.create(input).await {
        Ok(_) => confirmation(
            StatusCode::CREATED,
            format!("{} created successfully", T::TITLE),
        ),
        Err(err) => {
            error!(resource = T::SINGULAR, %err, "create failed");
            err.into_response()
        }
    }
}

/// PUT /v1/{plural}/{id}
pub async fn update<T: Resource>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let input: T = match serde_json::from_slice(&body) {
        Ok(input) => input,
        Err(err) => {
            let err = ResourceError::Decode(err.to_string());
            error!(resource = T::SINGULAR, %err, "update rejected");
            // Malformed update bodies report 422 rather than the create
            // path's 400.
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
    };

    let id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // A payload may omit its id (the path is authoritative), but a non-zero
    // payload id must agree with the path.
    if input.id() != 0 && input.id() != id {
        let err = ResourceError::IdentityMismatch {
            path: id,
            payload: input.id(),
        };
        error!(resource = T::SINGULAR, %err, "update rejected");
        return err.into_response();
    }

    match state.service.update(id, input).await {
        Ok(_) => confirmation(
            StatusCode::OK,
            format!("{} updated successfully", T::TITLE),
        ),
        Err(err) => {
            error!(resource = T::SINGULAR, id, %err, "update failed");
            err.into_response()
        }
    }
}

/// GET /v1/{plural}/{id}
#[instrument(
    name = "fetch",
    skip_all,
    fields(resource = T::SINGULAR, entity.id = tracing::field::Empty)
)]
pub async fn fetch<T: Resource>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service.get(id).await {
        Ok(entity) => {
            if state.config.span_enrichment_enabled() {
                Span::current().record("entity.id", entity.id().to_string().as_str());
            }
            (StatusCode::OK, Json(entity)).into_response()
        }
        Err(err) => {
            error!(resource = T::SINGULAR, id, %err, "fetch failed");
            err.into_response()
        }
    }
}

/// DELETE /v1/{plural}/{id}
pub async fn remove<T: Resource>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service.delete(id).await {
        Ok(()) => confirmation(
            StatusCode::OK,
            format!("{} deleted successfully", T::TITLE),
        ),
        Err(err) => {
            error!(resource = T::SINGULAR, id, %err, "delete failed");
            err.into_response()
        }
    }
}

/// GET /v1/{plural}
pub async fn list<T: Resource>(State(state): State<AppState<T>>) -> Response {
    match state.service.list().await {
        Ok(entities) => (StatusCode::OK, Json(entities)).into_response(),
        Err(err) => {
            error!(resource = T::SINGULAR, %err, "list failed");
            err.into_response()
        }
    }
}

// Placeholder endpoints. They acknowledge the method without touching the
// service.

/// PATCH /v1/{plural}/{id}
pub async fn patch_stub() -> Response {
    confirmation(StatusCode::OK, "PATCH".to_string())
}

/// OPTIONS /v1/{plural}
pub async fn options_stub() -> Response {
    confirmation(StatusCode::OK, "OPTIONS".to_string())
}

/// HEAD /v1/{plural}
pub async fn head_stub() -> Response {
    confirmation(StatusCode::OK, "HEAD".to_string())
}

/// Parse the path id segment. The router guarantees the segment is present
/// but not that it is numeric; non-numeric ids are reported as server
/// errors.
fn parse_id<T: Resource>(raw: &str) -> Result<i64, Response> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(err) => {
            error!(resource = T::SINGULAR, raw, %err, "path id rejected");
            Err(ResourceError::IdParse(err.to_string()).into_response())
        }
    }
}

fn confirmation(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
