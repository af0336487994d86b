//! # ember_items - Items and Inventory Storage
//!
//! This crate provides the item model shared by the server's game logic.
//!
//! # Features
//!
//! - Immutable item definitions in a shared catalog
//! - Item instances with enhancement level and a mutable unit count
//! - Grid inventory with footprint-aware slot allocation
//! - Data-driven stacking whitelist
//!
//! # Example
//!
//! ```ignore
//! use ember_items::prelude::*;
//! use ember_core::ItemKind;
//!
//! let mut catalog = ItemCatalog::new();
//! let bless = catalog.register(
//!     ItemDefinition::new(ItemKind::new(14, 13), "Jewel of Bless"),
//! );
//!
//! let mut inventory = Inventory::new(8, 8);
//! let slot = inventory.find_free_slot(&bless).unwrap();
//! inventory.add(Item::new(bless, 1), slot).unwrap();
//! ```

pub mod error;
pub mod inventory;
pub mod item;
pub mod stack;

pub mod prelude {
    pub use crate::error::InventoryError;
    pub use crate::inventory::Inventory;
    pub use crate::item::{Item, ItemCatalog, ItemDefinition};
    pub use crate::stack::StackRules;
}

pub use prelude::*;
