//! Item definitions, the shared catalog, and item instances

use ember_core::ItemKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable catalog entry describing an item kind
///
/// Definitions are shared read-only; game logic never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Catalog identity
    pub kind: ItemKind,
    /// Display name
    pub name: String,
    /// Maximum distinct holdings of this kind per character (0 = unlimited)
    ///
    /// The limit caps item records, not the quantity merged into a stack.
    pub storage_limit: u32,
    /// Footprint width in inventory cells
    pub width: u8,
    /// Footprint height in inventory cells
    pub height: u8,
}

impl ItemDefinition {
    /// Create a definition with a 1x1 footprint and no storage limit
    pub fn new(kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            storage_limit: 0,
            width: 1,
            height: 1,
        }
    }

    /// Set the per-character storage limit
    pub fn with_storage_limit(mut self, limit: u32) -> Self {
        self.storage_limit = limit;
        self
    }

    /// Set the slot footprint
    pub fn with_footprint(mut self, width: u8, height: u8) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }
}

/// Shared read-only catalog of item definitions, keyed by kind
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemKind, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Register a definition, returning the shared handle
    pub fn register(&mut self, definition: ItemDefinition) -> Arc<ItemDefinition> {
        let definition = Arc::new(definition);
        self.definitions
            .insert(definition.kind, Arc::clone(&definition));
        definition
    }

    /// Look up a definition by kind
    pub fn get(&self, kind: ItemKind) -> Option<Arc<ItemDefinition>> {
        self.definitions.get(&kind).cloned()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// An item instance owned by whichever container currently holds it
///
/// `count` is the count-or-durability value and the only field the game
/// logic mutates in place. A stackable item whose count reaches zero is
/// removed from its container in the same operation.
#[derive(Debug, Clone)]
pub struct Item {
    /// Shared definition
    pub definition: Arc<ItemDefinition>,
    /// Enhancement level, shown as a `+N` name suffix when non-zero
    pub level: u8,
    /// Unit count (or durability for non-stacking kinds)
    pub count: u32,
    /// Anchor slot within the owning container
    pub slot: u8,
}

impl Item {
    /// Create an item with the given count, not yet placed in a container
    pub fn new(definition: Arc<ItemDefinition>, count: u32) -> Self {
        Self {
            definition,
            level: 0,
            count: count.max(1),
            slot: 0,
        }
    }

    /// Set the enhancement level
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Catalog identity of this item
    #[inline]
    pub fn kind(&self) -> ItemKind {
        self.definition.kind
    }

    /// Display name including the enhancement suffix
    pub fn display_name(&self) -> String {
        if self.level > 0 {
            format!("{} +{}", self.definition.name, self.level)
        } else {
            self.definition.name.clone()
        }
    }
}
