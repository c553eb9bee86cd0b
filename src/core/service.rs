//! Store contract and the pass-through service layer

use crate::core::error::ResourceResult;
use crate::core::resource::Resource;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence contract for a resource type.
///
/// Implementations own identifier assignment and row-level failure
/// classification; callers never see raw driver errors.
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync {
    /// Insert a row and return the entity with its assigned identifier.
    async fn create(&self, entity: T) -> ResourceResult<T>;

    /// Full-record update of the row matching `id`.
    async fn update(&self, id: i64, entity: T) -> ResourceResult<T>;

    /// Physically delete the row matching `id`.
    async fn delete(&self, id: i64) -> ResourceResult<()>;

    /// Fetch the row matching `id`.
    async fn get(&self, id: i64) -> ResourceResult<T>;

    /// Fetch all rows. Always a valid (possibly empty) vec.
    async fn list(&self) -> ResourceResult<Vec<T>>;
}

/// Orchestration layer between the transport and the store.
///
/// Behaviorally transparent today: every method forwards unchanged. It
/// exists as the seam where business-rule validation or multi-step
/// orchestration would be inserted without touching the controller.
pub struct ResourceService<T: Resource> {
    store: Arc<dyn ResourceStore<T>>,
}

impl<T: Resource> ResourceService<T> {
    pub fn new(store: Arc<dyn ResourceStore<T>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, entity: T) -> ResourceResult<T> {
        self.store.create(entity).await
    }

    pub async fn update(&self, id: i64, entity: T) -> ResourceResult<T> {
        self.store.update(id, entity).await
    }

    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        self.store.delete(id).await
    }

    pub async fn get(&self, id: i64) -> ResourceResult<T> {
        self.store.get(id).await
    }

    pub async fn list(&self) -> ResourceResult<Vec<T>> {
        self.store.list().await
    }
}

impl<T: Resource> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
