//! Data-driven stacking whitelist

use crate::item::Item;
use ember_core::ItemKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whitelist of item kinds that stack by unit count
///
/// Kinds not in the set use unique-instance semantics. New stackable kinds
/// are added by data, not code: the set deserializes from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackRules {
    stackable: HashSet<ItemKind>,
}

impl StackRules {
    /// Create rules from a list of stackable kinds
    pub fn new(kinds: impl IntoIterator<Item = ItemKind>) -> Self {
        Self {
            stackable: kinds.into_iter().collect(),
        }
    }

    /// Create rules with no stackable kinds
    pub fn empty() -> Self {
        Self {
            stackable: HashSet::new(),
        }
    }

    /// Check whether a kind stacks by count
    pub fn is_stackable(&self, kind: ItemKind) -> bool {
        self.stackable.contains(&kind)
    }

    /// Check whether an item's kind stacks by count
    pub fn is_stackable_item(&self, item: &Item) -> bool {
        self.is_stackable(item.kind())
    }
}

impl Default for StackRules {
    /// Rules shipped with the server: the three stackable jewels
    fn default() -> Self {
        Self::new([
            ItemKind::new(14, 13), // Jewel of Bless
            ItemKind::new(14, 14), // Jewel of Soul
            ItemKind::new(12, 15), // Jewel of Chaos
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = StackRules::default();
        assert!(rules.is_stackable(ItemKind::new(14, 13)));
        assert!(rules.is_stackable(ItemKind::new(12, 15)));
        assert!(!rules.is_stackable(ItemKind::new(0, 1)));
    }

    #[test]
    fn test_rules_load_from_json() {
        let json = r#"[
            { "group": 14, "number": 13 },
            { "group": 7, "number": 2 }
        ]"#;
        let rules: StackRules = serde_json::from_str(json).unwrap();
        assert!(rules.is_stackable(ItemKind::new(14, 13)));
        assert!(rules.is_stackable(ItemKind::new(7, 2)));
        assert!(!rules.is_stackable(ItemKind::new(14, 14)));
    }

    #[test]
    fn test_empty_rules() {
        let rules = StackRules::empty();
        assert!(!rules.is_stackable(ItemKind::new(14, 13)));
    }
}
