use std::sync::Arc;

use anyhow::Context;

use stockroom_infra::{AuditSink, InventoryService, ItemStore, SqliteItemStore, TracingAuditSink};

use crate::app::views::{TeraViews, ViewError, ViewRenderer};

/// Everything a handler needs, shared behind an `Arc` extension.
#[derive(Clone)]
pub struct AppServices {
    inventory: InventoryService,
    views: Arc<dyn ViewRenderer>,
}

impl AppServices {
    pub fn new(inventory: InventoryService, views: Arc<dyn ViewRenderer>) -> Self {
        Self { inventory, views }
    }

    /// Production wiring: tracing audit trail and the built-in page templates.
    pub fn with_store(store: Arc<dyn ItemStore>) -> Result<Self, ViewError> {
        let audit: Arc<dyn AuditSink> = Arc::new(TracingAuditSink);
        let views = TeraViews::new()?;
        Ok(Self::new(InventoryService::new(store, audit), Arc::new(views)))
    }

    /// Dev/test wiring over a private in-memory SQLite database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let store = SqliteItemStore::in_memory()
            .await
            .context("failed to open in-memory store")?;
        Ok(Self::with_store(Arc::new(store))?)
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    pub fn views(&self) -> &dyn ViewRenderer {
        self.views.as_ref()
    }
}
