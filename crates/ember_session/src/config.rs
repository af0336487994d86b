//! Tuning configuration for pickup resolution

use serde::{Deserialize, Serialize};

/// Product-tunable pickup parameters
///
/// Both values are policy rather than architecture and load from
/// configuration alongside the stack whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    /// Maximum distance between player and drop, in distance units
    pub interaction_radius: u32,
    /// Message shown when the storage limit blocks a pickup
    ///
    /// `{item}` is replaced with the item's display name, enhancement
    /// suffix included.
    pub limit_message: String,
}

impl PickupConfig {
    /// Render the limit message for an item name
    pub fn limit_message_for(&self, name: &str) -> String {
        self.limit_message.replace("{item}", name)
    }
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            interaction_radius: 3,
            limit_message: "Limit reached for '{item}'.".to_string(),
        }
    }
}
