//! Inventory operations over an injected record store.
//!
//! `InventoryService` is the single entry point for both HTTP surfaces. Each
//! public operation validates its input, runs against the store, and then
//! reports the outcome to the audit sink. Auditing happens after the fact and
//! never alters the result.
//!
//! The page and API surfaces differ in two places, modelled as separate
//! operations over shared primitives:
//!
//! - update: [`InventoryService::replace`] (both fields required) vs
//!   [`InventoryService::patch`] (only supplied fields), both through `mutate`
//! - delete: [`InventoryService::delete`] (missing id is `NotFound`) vs
//!   [`InventoryService::delete_if_exists`] (missing id is a no-op), both through `remove`

use std::sync::Arc;

use thiserror::Error;

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{
    AssignSupplier, CreateItem, InventoryEvent, InventoryItem, ItemChanges, PatchItem, ReplaceItem,
};

use crate::audit::{AuditEntry, AuditSink, NoopAuditSink, Operation};
use crate::store::{ItemStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input. The message is caller-facing.
    #[error("{0}")]
    Validation(String),
    /// The referenced item does not exist. The message stays id-free for callers.
    #[error("Item not found")]
    NotFound(ItemId),
    /// Unexpected persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Stable machine-readable code.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_error",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Store(_) => "store_error",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::NotFound(id) => ServiceError::NotFound(id),
        }
    }
}

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn ItemStore>,
    audit: Arc<dyn AuditSink>,
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService").finish_non_exhaustive()
    }
}

impl InventoryService {
    pub fn new(store: Arc<dyn ItemStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    /// Service with auditing disabled.
    pub fn without_audit(store: Arc<dyn ItemStore>) -> Self {
        Self::new(store, Arc::new(NoopAuditSink))
    }

    pub async fn list(&self) -> Result<Vec<InventoryItem>, ServiceError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: ItemId) -> Result<InventoryItem, ServiceError> {
        self.store.get(id).await?.ok_or(ServiceError::NotFound(id))
    }

    pub async fn create(&self, input: &CreateItem) -> Result<InventoryItem, ServiceError> {
        let result = self.insert(input).await;
        self.observe(Operation::Create, None, Some(input), &result, |item| {
            AuditEntry::Applied(InventoryEvent::created(item))
        });
        result
    }

    /// Page-surface update: overwrite both name and amount.
    pub async fn replace(&self, id: ItemId, input: &ReplaceItem) -> Result<InventoryItem, ServiceError> {
        let result = self.mutate(id, input.validate()).await;
        self.observe(Operation::Replace, Some(id), Some(input), &result, |item| {
            AuditEntry::Applied(InventoryEvent::updated(item))
        });
        result
    }

    /// API-surface update: overwrite only the supplied fields.
    pub async fn patch(&self, id: ItemId, input: &PatchItem) -> Result<InventoryItem, ServiceError> {
        let result = self.mutate(id, input.validate()).await;
        self.observe(Operation::Patch, Some(id), Some(input), &result, |item| {
            AuditEntry::Applied(InventoryEvent::updated(item))
        });
        result
    }

    pub async fn assign_supplier(
        &self,
        id: ItemId,
        input: &AssignSupplier,
    ) -> Result<InventoryItem, ServiceError> {
        let result = self.mutate(id, input.validate()).await;
        self.observe(Operation::AssignSupplier, Some(id), Some(input), &result, |item| {
            AuditEntry::Applied(InventoryEvent::SupplierAssigned {
                id: item.id_typed(),
                supplier: item.supplier().unwrap_or_default().to_string(),
            })
        });
        result
    }

    /// API-surface delete: a missing id is `NotFound`.
    pub async fn delete(&self, id: ItemId) -> Result<InventoryItem, ServiceError> {
        let result = match self.remove(id).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(ServiceError::NotFound(id)),
            Err(e) => Err(e),
        };
        self.observe(Operation::Delete, Some(id), None, &result, |item| {
            AuditEntry::Applied(InventoryEvent::deleted(item))
        });
        result
    }

    /// Page-surface delete: a missing id is silently ignored.
    pub async fn delete_if_exists(&self, id: ItemId) -> Result<Option<InventoryItem>, ServiceError> {
        let result = self.remove(id).await;
        self.observe(Operation::DeleteIfExists, Some(id), None, &result, |removed| match removed {
            Some(item) => AuditEntry::Applied(InventoryEvent::deleted(item)),
            None => AuditEntry::Skipped {
                operation: Operation::DeleteIfExists,
                id,
            },
        });
        result
    }

    async fn insert(&self, input: &CreateItem) -> Result<InventoryItem, ServiceError> {
        let new_item = input.validate()?;
        Ok(self.store.insert(&new_item).await?)
    }

    /// Shared read-modify-write primitive for every in-place update.
    ///
    /// Validation runs before the existence check.
    async fn mutate(
        &self,
        id: ItemId,
        changes: Result<ItemChanges, DomainError>,
    ) -> Result<InventoryItem, ServiceError> {
        let changes = changes?;
        let mut item = self.store.get(id).await?.ok_or(DomainError::NotFound(id))?;
        item.apply(&changes);

        // The row may have been deleted between read and write.
        if !self.store.save(&item).await? {
            return Err(ServiceError::NotFound(id));
        }
        Ok(item)
    }

    /// Shared delete primitive: returns the removed item, or `None` if absent.
    async fn remove(&self, id: ItemId) -> Result<Option<InventoryItem>, ServiceError> {
        let Some(item) = self.store.get(id).await? else {
            return Ok(None);
        };
        if self.store.delete(id).await? {
            Ok(Some(item))
        } else {
            Ok(None)
        }
    }

    fn observe<T>(
        &self,
        operation: Operation,
        id: Option<ItemId>,
        input: Option<&dyn std::fmt::Debug>,
        result: &Result<T, ServiceError>,
        on_success: impl FnOnce(&T) -> AuditEntry,
    ) {
        let entry = match result {
            Ok(value) => on_success(value),
            Err(err) => AuditEntry::Rejected {
                operation,
                id,
                input: input.map(|i| format!("{i:?}")),
                kind: err.kind(),
                message: err.to_string(),
            },
        };
        self.audit.record(entry);
    }
}
