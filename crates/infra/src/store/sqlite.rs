//! SQLite-backed item store.
//!
//! The schema is a single table created on connect if it does not exist.
//! There is no migration machinery.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, NewItem};

use super::{ItemStore, StoreError};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS inventory_item (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT    NOT NULL,
        amount   INTEGER NOT NULL,
        supplier TEXT    NULL
    )
"#;

/// Item store over a `SqlitePool`.
///
/// `SqlitePool` is `Send + Sync` and cheap to clone, so the store can be shared
/// behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Connect to a database URL (e.g. `sqlite://inventory.db`), creating the
    /// file and the table if missing.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// A private in-memory database.
    ///
    /// Pinned to a single connection that never expires: every new SQLite
    /// memory connection would otherwise see its own empty database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool and ensure the schema exists.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!("inventory_item table ready");
        Ok(Self { pool })
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_item(row: &SqliteRow) -> Result<InventoryItem, sqlx::Error> {
    Ok(InventoryItem::from_parts(
        ItemId::new(row.try_get::<i64, _>("id")?),
        row.try_get("name")?,
        row.try_get("amount")?,
        row.try_get("supplier")?,
    ))
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn list(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, amount, supplier
            FROM inventory_item
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let items = rows.iter().map(row_to_item).collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    async fn get(&self, id: ItemId) -> Result<Option<InventoryItem>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, amount, supplier
            FROM inventory_item
            WHERE id = ?1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_item).transpose()?)
    }

    async fn insert(&self, item: &NewItem) -> Result<InventoryItem, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO inventory_item (name, amount, supplier)
            VALUES (?1, ?2, NULL)
            "#,
        )
        .bind(&item.name)
        .bind(item.amount)
        .execute(&self.pool)
        .await?;

        let id = ItemId::new(result.last_insert_rowid());
        Ok(InventoryItem::from_new(id, item.clone()))
    }

    async fn save(&self, item: &InventoryItem) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE inventory_item
            SET name = ?1,
                amount = ?2,
                supplier = ?3
            WHERE id = ?4
            "#,
        )
        .bind(item.name())
        .bind(item.amount())
        .bind(item.supplier())
        .bind(item.id_typed().get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM inventory_item WHERE id = ?1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::ItemChanges;

    fn bolt() -> NewItem {
        NewItem {
            name: "Bolt".into(),
            amount: 10,
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_with_null_supplier() {
        let store = SqliteItemStore::in_memory().await.unwrap();
        let created = store.insert(&bolt()).await.unwrap();
        assert_eq!(created.id_typed(), ItemId::new(1));

        let fetched = store.get(created.id_typed()).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.supplier(), None);
    }

    #[tokio::test]
    async fn save_persists_supplier_and_reports_missing_rows() {
        let store = SqliteItemStore::in_memory().await.unwrap();
        let mut item = store.insert(&bolt()).await.unwrap();
        item.apply(&ItemChanges {
            supplier: Some("Acme".into()),
            ..ItemChanges::default()
        });
        assert!(store.save(&item).await.unwrap());

        let fetched = store.get(item.id_typed()).await.unwrap().unwrap();
        assert_eq!(fetched.supplier(), Some("Acme"));

        let ghost = InventoryItem::from_parts(ItemId::new(99), "Ghost".into(), 0, None);
        assert!(!store.save(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn delete_is_hard_and_ids_are_not_reused() {
        let store = SqliteItemStore::in_memory().await.unwrap();
        let first = store.insert(&bolt()).await.unwrap();
        assert!(store.delete(first.id_typed()).await.unwrap());
        assert!(!store.delete(first.id_typed()).await.unwrap());
        assert!(store.get(first.id_typed()).await.unwrap().is_none());

        let second = store.insert(&bolt()).await.unwrap();
        assert!(second.id_typed() > first.id_typed());
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let store = SqliteItemStore::in_memory().await.unwrap();
        for name in ["a", "b", "c"] {
            store
                .insert(&NewItem {
                    name: name.into(),
                    amount: 1,
                })
                .await
                .unwrap();
        }
        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
