//! Inventory domain module.
//!
//! This crate contains the item model and business rules for the per-category
//! record stores, implemented purely as deterministic domain logic (no IO, no
//! storage).

pub mod item;
pub mod threshold;

pub use item::{Category, InventoryItem, ItemPatch, NewItem};
pub use threshold::is_low;
