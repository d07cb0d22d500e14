//! Inventory domain module.
//!
//! This crate contains the business rules for inventory items as pure,
//! deterministic logic (no IO, no HTTP, no storage). Input validation and the
//! single in-place mutation primitive live here; the store and the HTTP layer
//! only move validated values around.

pub mod amount;
pub mod command;
pub mod event;
pub mod item;

pub use amount::{parse_amount, RawAmount};
pub use command::{
    AssignSupplier, CreateItem, ItemChanges, NewItem, PatchItem, ReplaceItem, messages,
};
pub use event::InventoryEvent;
pub use item::InventoryItem;
