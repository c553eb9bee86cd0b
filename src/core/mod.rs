//! Core module containing the fundamental traits and types of the pipeline

pub mod error;
pub mod resource;
pub mod service;

pub use error::{ResourceError, ResourceResult};
pub use resource::Resource;
pub use service::{ResourceService, ResourceStore};
