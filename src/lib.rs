//! # Billing-RS
//!
//! Invoice and payment resource services built on a single generic CRUD
//! pipeline: controller → service → store.
//!
//! ## Architecture
//!
//! - **Resource trait**: each entity type declares its wire shape, table
//!   name, and column bindings once; everything else is generic.
//! - **Controller** (`server::handlers`): axum handlers that decode request
//!   bodies, validate path/payload identity, and map the error taxonomy to
//!   HTTP statuses.
//! - **Service** (`core::service`): pass-through seam between transport and
//!   storage where business rules would be added.
//! - **Store** (`storage::sqlite`): SQLite-backed persistence with
//!   auto-assigned identifiers and a read-before-write update check.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billing::prelude::*;
//!
//! let config = Arc::new(AppConfig::from_env());
//! let pool = billing::storage::sqlite::connect(&config.database_path).await?;
//! let app = billing::server::build_app(config, pool).await?;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4565").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ResourceError, ResourceResult},
        resource::Resource,
        service::{ResourceService, ResourceStore},
    };

    // === Entities ===
    pub use crate::entities::{Invoice, Payment};

    // === Storage ===
    pub use crate::storage::sqlite::SqliteStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, build_app, resource_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::{delete, get, post, put},
    };
}
