//! Record store abstraction for inventory items.
//!
//! Every method is a single read or write against one table; there are no
//! multi-statement transactions. Concurrent writers to the same id interleave
//! and the last write wins.

pub mod in_memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, NewItem};

pub use in_memory::InMemoryItemStore;
pub use sqlite::SqliteItemStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot serve requests (e.g. a poisoned in-memory lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in id order.
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError>;

    async fn get(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError>;

    /// Insert a validated item, assigning a fresh id. Ids are never reused.
    async fn insert(&self, item: &NewItem) -> Result<InventoryItem, StoreError>;

    /// Overwrite every mutable column of an existing row.
    ///
    /// Returns `false` if no row with that id exists.
    async fn save(&self, item: &InventoryItem) -> Result<bool, StoreError>;

    /// Hard-delete a row. Returns `false` if no row with that id existed.
    async fn delete(&self, id: ItemId) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError> {
        (**self).list().await
    }

    async fn get(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError> {
        (**self).get(id).await
    }

    async fn insert(&self, item: &NewItem) -> Result<InventoryItem, StoreError> {
        (**self).insert(item).await
    }

    async fn save(&self, item: &InventoryItem) -> Result<bool, StoreError> {
        (**self).save(item).await
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        (**self).delete(id).await
    }
}
