//! Audit records describing what an operation did.
//!
//! These are produced after a successful mutation and handed to an audit sink;
//! nothing reads them back.

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

use crate::item::InventoryItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ItemCreated {
        id: ItemId,
        name: String,
        amount: i64,
    },
    ItemUpdated {
        id: ItemId,
        name: String,
        amount: i64,
    },
    SupplierAssigned {
        id: ItemId,
        supplier: String,
    },
    ItemDeleted {
        id: ItemId,
        name: String,
    },
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemCreated { .. } => "inventory.item.created",
            InventoryEvent::ItemUpdated { .. } => "inventory.item.updated",
            InventoryEvent::SupplierAssigned { .. } => "inventory.item.supplier_assigned",
            InventoryEvent::ItemDeleted { .. } => "inventory.item.deleted",
        }
    }

    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemCreated { id, .. }
            | InventoryEvent::ItemUpdated { id, .. }
            | InventoryEvent::SupplierAssigned { id, .. }
            | InventoryEvent::ItemDeleted { id, .. } => *id,
        }
    }

    pub fn created(item: &InventoryItem) -> Self {
        InventoryEvent::ItemCreated {
            id: item.id_typed(),
            name: item.name().to_string(),
            amount: item.amount(),
        }
    }

    pub fn updated(item: &InventoryItem) -> Self {
        InventoryEvent::ItemUpdated {
            id: item.id_typed(),
            name: item.name().to_string(),
            amount: item.amount(),
        }
    }

    pub fn deleted(item: &InventoryItem) -> Self {
        InventoryEvent::ItemDeleted {
            id: item.id_typed(),
            name: item.name().to_string(),
        }
    }
}
