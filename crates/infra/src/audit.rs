//! Audit trail sinks.
//!
//! The service hands one [`AuditEntry`] to its sink after every mutating
//! operation attempt, successful or not. Sinks are write-only: nothing in the
//! system reads the trail back.

use std::sync::Mutex;

use stockroom_core::ItemId;
use stockroom_inventory::InventoryEvent;

/// Mutating operations exposed by the service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Replace,
    Patch,
    AssignSupplier,
    Delete,
    DeleteIfExists,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Replace => "replace",
            Operation::Patch => "patch",
            Operation::AssignSupplier => "assign_supplier",
            Operation::Delete => "delete",
            Operation::DeleteIfExists => "delete_if_exists",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEntry {
    /// The operation changed the store.
    Applied(InventoryEvent),
    /// The operation targeted a missing id and was deliberately a no-op.
    Skipped { operation: Operation, id: ItemId },
    /// The operation failed. `kind` is the stable error code and `input` the
    /// submitted fields as received, when the operation takes any.
    Rejected {
        operation: Operation,
        id: Option<ItemId>,
        input: Option<String>,
        kind: &'static str,
        message: String,
    },
}

pub trait AuditSink: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

/// Discards every entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _entry: AuditEntry) {}
}

/// Keeps entries in memory (tests/dev).
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, entry: AuditEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

/// Emits entries through `tracing`: `info` for applied/skipped, `error` for rejected.
///
/// Where the lines end up (stdout, a log file) is decided by the process-wide
/// subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: AuditEntry) {
        match entry {
            AuditEntry::Applied(event) => {
                let event_type = event.event_type();
                match event {
                    InventoryEvent::ItemCreated { id, name, amount } => {
                        tracing::info!(event_type, item_id = %id, %name, amount, "added new item");
                    }
                    InventoryEvent::ItemUpdated { id, name, amount } => {
                        tracing::info!(event_type, item_id = %id, %name, amount, "updated item");
                    }
                    InventoryEvent::SupplierAssigned { id, supplier } => {
                        tracing::info!(event_type, item_id = %id, %supplier, "added supplier to item");
                    }
                    InventoryEvent::ItemDeleted { id, name } => {
                        tracing::info!(event_type, item_id = %id, %name, "deleted item");
                    }
                }
            }
            AuditEntry::Skipped { operation, id } => {
                tracing::info!(
                    operation = operation.as_str(),
                    item_id = %id,
                    "item not found; nothing to do"
                );
            }
            AuditEntry::Rejected {
                operation,
                id,
                input,
                kind,
                message,
            } => {
                tracing::error!(
                    operation = operation.as_str(),
                    item_id = ?id.map(|i| i.get()),
                    input = input.as_deref().unwrap_or_default(),
                    kind,
                    %message,
                    "operation failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    /// Shared buffer the test subscriber writes formatted lines into.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn log_lines(entry: AuditEntry) -> Vec<String> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, || TracingAuditSink.record(entry));

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn applied_and_skipped_entries_log_at_info() {
        let created = AuditEntry::Applied(InventoryEvent::ItemCreated {
            id: ItemId::new(1),
            name: "Bolt".into(),
            amount: 10,
        });
        let skipped = AuditEntry::Skipped {
            operation: Operation::DeleteIfExists,
            id: ItemId::new(2),
        };

        for entry in [created, skipped] {
            let lines = log_lines(entry);
            assert_eq!(lines.len(), 1, "{lines:?}");
            assert!(lines[0].contains(" INFO "), "{}", lines[0]);
        }
    }

    #[test]
    fn rejected_entries_log_at_error_with_input() {
        let lines = log_lines(AuditEntry::Rejected {
            operation: Operation::Create,
            id: None,
            input: Some("name=Bolt amount=ten".into()),
            kind: "validation_error",
            message: "Amount must be a valid integer.".into(),
        });

        assert_eq!(lines.len(), 1, "{lines:?}");
        let line = &lines[0];
        assert!(line.contains(" ERROR "), "{line}");
        assert!(line.contains("operation=\"create\""), "{line}");
        assert!(line.contains("name=Bolt amount=ten"), "{line}");
        assert!(line.contains("Amount must be a valid integer."), "{line}");
    }

    #[test]
    fn in_memory_sink_keeps_order() {
        let sink = InMemoryAuditSink::new();
        let first = AuditEntry::Skipped { operation: Operation::DeleteIfExists, id: ItemId::new(1) };
        let second = AuditEntry::Skipped { operation: Operation::DeleteIfExists, id: ItemId::new(2) };
        sink.record(first.clone());
        sink.record(second.clone());
        assert_eq!(sink.entries(), vec![first, second]);
    }
}
