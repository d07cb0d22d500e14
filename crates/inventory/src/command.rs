//! Caller inputs and their validation.
//!
//! Each surface operation has its own input type. Validation turns the raw
//! input into either a [`NewItem`] (create) or an [`ItemChanges`] value that
//! the shared mutation primitive [`InventoryItem::apply`](crate::InventoryItem::apply)
//! understands.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::amount::RawAmount;

/// Stable, caller-facing validation messages.
pub mod messages {
    pub const MISSING_NAME_OR_AMOUNT: &str = "Please provide both name and amount.";
    /// Page create form.
    pub const MISSING_ITEM_NAME_OR_AMOUNT: &str = "Please provide both an item name and an amount.";
    /// Page edit form.
    pub const MISSING_EDIT_FIELDS: &str = "Please provide both a name and an amount.";
    pub const INVALID_AMOUNT: &str = "Amount must be a valid integer.";
    pub const EMPTY_NAME: &str = "Name cannot be empty.";
    pub const MISSING_SUPPLIER: &str = "Please provide a supplier's name.";
}

/// A validated item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub amount: i64,
}

/// Field overwrites applied to an existing item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub amount: Option<i64>,
    pub supplier: Option<String>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.amount.is_none() && self.supplier.is_none()
    }
}

/// Create input (both surfaces).
///
/// `missing_message` overrides the message used when a field is missing;
/// each surface words it differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateItem {
    pub name: Option<String>,
    pub amount: Option<RawAmount>,
    pub missing_message: Option<&'static str>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>, amount: impl Into<RawAmount>) -> Self {
        Self {
            name: Some(name.into()),
            amount: Some(amount.into()),
            missing_message: None,
        }
    }

    pub fn with_missing_message(mut self, message: &'static str) -> Self {
        self.missing_message = Some(message);
        self
    }

    pub fn validate(&self) -> DomainResult<NewItem> {
        let missing = self.missing_message.unwrap_or(messages::MISSING_NAME_OR_AMOUNT);
        let (name, amount) = required_name_and_amount(&self.name, &self.amount, missing)?;
        Ok(NewItem { name, amount })
    }
}

/// Full-overwrite update (page surface): both fields must be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceItem {
    pub name: Option<String>,
    pub amount: Option<RawAmount>,
}

impl ReplaceItem {
    pub fn validate(&self) -> DomainResult<ItemChanges> {
        let (name, amount) =
            required_name_and_amount(&self.name, &self.amount, messages::MISSING_EDIT_FIELDS)?;
        Ok(ItemChanges {
            name: Some(name),
            amount: Some(amount),
            supplier: None,
        })
    }
}

/// Partial update (API surface): only supplied fields are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchItem {
    pub name: Option<String>,
    pub amount: Option<RawAmount>,
}

impl PatchItem {
    pub fn validate(&self) -> DomainResult<ItemChanges> {
        let name = match &self.name {
            Some(n) => Some(non_blank(n).ok_or_else(|| DomainError::validation(messages::EMPTY_NAME))?),
            None => None,
        };
        let amount = self.amount.as_ref().map(RawAmount::coerce).transpose()?;
        Ok(ItemChanges {
            name,
            amount,
            supplier: None,
        })
    }
}

/// Supplier assignment (page surface).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignSupplier {
    pub supplier: Option<String>,
}

impl AssignSupplier {
    pub fn new(supplier: impl Into<String>) -> Self {
        Self {
            supplier: Some(supplier.into()),
        }
    }

    pub fn validate(&self) -> DomainResult<ItemChanges> {
        let supplier = self
            .supplier
            .as_deref()
            .and_then(non_blank)
            .ok_or_else(|| DomainError::validation(messages::MISSING_SUPPLIER))?;
        Ok(ItemChanges {
            supplier: Some(supplier),
            ..ItemChanges::default()
        })
    }
}

fn required_name_and_amount(
    name: &Option<String>,
    amount: &Option<RawAmount>,
    missing: &'static str,
) -> DomainResult<(String, i64)> {
    let name = name.as_deref().and_then(non_blank);
    // Blank form fields count as missing, not as malformed.
    let amount = amount
        .as_ref()
        .filter(|a| !matches!(a, RawAmount::Text(s) if s.trim().is_empty()));

    match (name, amount) {
        (Some(name), Some(amount)) => Ok((name, amount.coerce()?)),
        _ => Err(DomainError::validation(missing)),
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
