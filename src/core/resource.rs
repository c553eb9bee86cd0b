//! Resource trait defining the capability interface every entity implements
//!
//! The controller, service, and store are written once, generically; an
//! entity type opts into the pipeline by declaring its names, columns, and
//! column bindings here.

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

/// Capability interface for a CRUD resource.
///
/// Implementors are flat records: an `id` assigned by the store plus scalar
/// business fields. The trait covers everything the generic pipeline needs:
/// URL segment, table name, column list, and value binding.
pub trait Resource:
    Clone
    + Send
    + Sync
    + Unpin
    + Serialize
    + DeserializeOwned
    + for<'r> sqlx::FromRow<'r, SqliteRow>
    + 'static
{
    /// Singular name used in log fields and error messages (e.g. "invoice").
    const SINGULAR: &'static str;

    /// Plural form used as the URL segment and table name (e.g. "invoices").
    const PLURAL: &'static str;

    /// Capitalized singular used in confirmation messages (e.g. "Invoice").
    const TITLE: &'static str;

    /// Column names persisted besides `id`, in bind order.
    const COLUMNS: &'static [&'static str];

    /// DDL executed at startup. Must be idempotent
    /// (`CREATE TABLE IF NOT EXISTS`).
    const MIGRATION: &'static str;

    /// The assigned identifier; zero means "not yet persisted".
    fn id(&self) -> i64;

    /// Set the identifier after the store assigns one.
    fn set_id(&mut self, id: i64);

    /// Bind the non-id column values onto `query`, in `COLUMNS` order.
    fn bind<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>>;
}
