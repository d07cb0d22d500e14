use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, NewItem};

use super::{ItemStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ItemId, InventoryItem>,
    last_id: i64,
}

/// In-memory item store.
///
/// Intended for tests/dev. Mirrors the SQLite store's id policy: ids start at 1
/// and are never handed out twice.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    table: RwLock<Table>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, item: &NewItem) -> Result<InventoryItem, StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.last_id += 1;
        let id = ItemId::new(table.last_id);
        let stored = InventoryItem::from_new(id, item.clone());
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, item: &InventoryItem) -> Result<bool, StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        match table.rows.get_mut(&item.id_typed()) {
            Some(row) => {
                *row = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }
}
