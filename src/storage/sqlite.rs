//! SQLite storage backend using sqlx.
//!
//! Provides a generic `SqliteStore<T>` implementing `ResourceStore<T>` for
//! any `Resource`, backed by one flat table per resource. Identifiers are
//! assigned by SQLite's rowid machinery at insert time.

use crate::core::error::{ResourceError, ResourceResult};
use crate::core::resource::Resource;
use crate::core::service::ResourceStore;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

static MEMDB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Acquire timeout so a saturated pool fails fast instead of blocking.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a connection pool for the given database path.
///
/// `:memory:` opens a uniquely named shared-cache memory database on a
/// single-connection pool; a plain `file::memory:` URI collides across
/// parallel tests.
pub async fn connect(path: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = if path == ":memory:" {
        let id = MEMDB_COUNTER.fetch_add(1, Ordering::Relaxed);
        let memdb_uri = format!(
            "file:billing-memdb-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            id
        );

        let options = SqliteConnectOptions::new()
            .filename(&memdb_uri)
            .shared_cache(true)
            .create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?
    } else {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?
    };

    info!(path = %path, "database connected");
    Ok(pool)
}

/// Generic resource store backed by SQLite.
///
/// One instance per resource type, all sharing the same pool. The table is
/// created on construction if absent.
#[derive(Clone, Debug)]
pub struct SqliteStore<T> {
    pool: SqlitePool,
    _marker: PhantomData<T>,
}

impl<T: Resource> SqliteStore<T> {
    /// Create a store for `T`, running its table migration.
    pub async fn new(pool: SqlitePool) -> ResourceResult<Self> {
        sqlx::query(T::MIGRATION).execute(&pool).await?;
        Ok(Self {
            pool,
            _marker: PhantomData,
        })
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for SqliteStore<T> {
    async fn create(&self, mut entity: T) -> ResourceResult<T> {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::PLURAL,
            T::COLUMNS.join(", "),
            placeholders
        );
        let result = entity.bind(sqlx::query(&sql)).execute(&self.pool).await?;
        entity.set_id(result.last_insert_rowid());

        debug!(resource = T::SINGULAR, id = entity.id(), "created");
        Ok(entity)
    }

    async fn update(&self, id: i64, mut entity: T) -> ResourceResult<T> {
        if id == 0 {
            return Err(ResourceError::Store(format!("invalid {} id", T::SINGULAR)));
        }

        // Existence check before the write: a missing row is NotFound. The
        // row can still vanish between the check and the write; the
        // rows-affected check below reports that as UpdateFailed.
        self.get(id).await?;

        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::PLURAL, assignments);
        let result = entity
            .bind(sqlx::query(&sql))
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ResourceError::UpdateFailed {
                resource: T::SINGULAR,
                id,
            });
        }
        entity.set_id(id);

        debug!(resource = T::SINGULAR, id, "updated");
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> ResourceResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::PLURAL);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(ResourceError::DeleteFailed {
                resource: T::SINGULAR,
                id,
            });
        }

        debug!(resource = T::SINGULAR, id, "deleted");
        Ok(())
    }

    async fn get(&self, id: i64) -> ResourceResult<T> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::PLURAL);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.ok_or(ResourceError::NotFound {
            resource: T::SINGULAR,
            id,
        })
    }

    async fn list(&self) -> ResourceResult<Vec<T>> {
        let sql = format!("SELECT * FROM {}", T::PLURAL);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;

        debug!(resource = T::SINGULAR, count = rows.len(), "listed");
        Ok(rows)
    }
}
