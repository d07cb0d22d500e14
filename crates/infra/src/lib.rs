//! Infrastructure layer: record store adapters, service orchestration, audit sinks.

pub mod audit;
pub mod service;
pub mod store;

pub use audit::{AuditEntry, AuditSink, InMemoryAuditSink, NoopAuditSink, Operation, TracingAuditSink};
pub use service::{InventoryService, ServiceError};
pub use store::{InMemoryItemStore, ItemStore, SqliteItemStore, StoreError};
