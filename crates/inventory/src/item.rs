use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::command::{ItemChanges, NewItem};

/// A single stocked good.
///
/// Instances are only produced by the record store (which assigns `id`), so a
/// value of this type always carries a non-empty name and an integer amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    amount: i64,
    supplier: Option<String>,
}

impl InventoryItem {
    /// Materialize a freshly inserted item under its store-assigned id.
    pub fn from_new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            name: new.name,
            amount: new.amount,
            supplier: None,
        }
    }

    /// Rebuild an item from a persisted row.
    pub fn from_parts(id: ItemId, name: String, amount: i64, supplier: Option<String>) -> Self {
        Self {
            id,
            name,
            amount,
            supplier,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    /// The one in-place mutation every update path goes through.
    ///
    /// `changes` is already validated; the id is never touched.
    pub fn apply(&mut self, changes: &ItemChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(supplier) = &changes.supplier {
            self.supplier = Some(supplier.clone());
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AssignSupplier, PatchItem, ReplaceItem};
    use crate::RawAmount;

    fn bolt() -> InventoryItem {
        InventoryItem::from_new(
            ItemId::new(1),
            NewItem {
                name: "Bolt".into(),
                amount: 10,
            },
        )
    }

    #[test]
    fn new_items_have_no_supplier() {
        let item = bolt();
        assert_eq!(item.supplier(), None);
        assert_eq!(item.id(), ItemId::new(1));
    }

    #[test]
    fn patch_preserves_untouched_fields() {
        let mut item = bolt();
        let changes = PatchItem {
            name: None,
            amount: Some(RawAmount::Integer(5)),
        }
        .validate()
        .unwrap();
        item.apply(&changes);
        assert_eq!(item.name(), "Bolt");
        assert_eq!(item.amount(), 5);
    }

    #[test]
    fn replace_and_supplier_share_apply() {
        let mut item = bolt();
        let replace = ReplaceItem {
            name: Some("Nut".into()),
            amount: Some("2".into()),
        };
        item.apply(&replace.validate().unwrap());
        item.apply(&AssignSupplier::new("Acme").validate().unwrap());

        assert_eq!(item.id_typed(), ItemId::new(1));
        assert_eq!(item.name(), "Nut");
        assert_eq!(item.amount(), 2);
        assert_eq!(item.supplier(), Some("Acme"));
    }

    #[test]
    fn empty_changes_are_a_no_op() {
        let mut item = bolt();
        item.apply(&ItemChanges::default());
        assert_eq!(item, bolt());
    }
}
