//! Storage implementations

pub mod sqlite;

pub use sqlite::{SqliteStore, connect};
