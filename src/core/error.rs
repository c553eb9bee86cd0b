//! Typed error handling for the resource pipeline
//!
//! A closed error-kind enumeration carried through every layer. The store
//! produces the storage variants, the controller produces the request
//! variants, and the boundary mapping switches on kind rather than
//! comparing error values.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Every failure the pipeline can produce.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Request body could not be decoded into the entity shape.
    /// The decoder's message is surfaced verbatim.
    #[error("{0}")]
    Decode(String),

    /// Path-supplied id and payload-embedded id disagree on update.
    #[error("path id {path} does not match payload id {payload}")]
    IdentityMismatch { path: i64, payload: i64 },

    /// Path id segment is not a valid 64-bit integer.
    #[error("{0}")]
    IdParse(String),

    /// No row matches the identifier.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The write affected zero rows even though the row existed at the
    /// preceding existence check. Distinct from `NotFound`.
    #[error("update of {resource} {id} affected no rows")]
    UpdateFailed { resource: &'static str, id: i64 },

    /// The delete affected zero rows.
    #[error("delete of {resource} {id} affected no rows")]
    DeleteFailed { resource: &'static str, id: i64 },

    /// Any other persistence failure.
    #[error("{0}")]
    Store(String),
}

impl ResourceError {
    /// HTTP status for this error kind.
    ///
    /// `Decode` maps to 400 here; the update boundary overrides it to 422.
    /// `IdParse` maps to 500: the router guarantees the segment's presence
    /// but not its format.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::Decode(_) => StatusCode::BAD_REQUEST,
            ResourceError::IdentityMismatch { .. } => StatusCode::BAD_REQUEST,
            ResourceError::IdParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ResourceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ResourceError::UpdateFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ResourceError::DeleteFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ResourceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body: a single `error` string, no structured code.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ResourceError {
    fn from(err: sqlx::Error) -> Self {
        ResourceError::Store(err.to_string())
    }
}

/// A specialized Result type for pipeline operations
pub type ResourceResult<T> = Result<T, ResourceError>;
