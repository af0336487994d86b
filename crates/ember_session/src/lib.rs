//! # ember_session - Player Sessions and Item Actions
//!
//! This crate resolves a player's item requests against world and
//! inventory state.
//!
//! # Features
//!
//! - Per-player ordered view-notification channel (fire-and-forget)
//! - Pickup resolution: money, stack merge, or brand-new holding
//! - One-unit consumption of stackable items
//! - Post-pickup observer hook for quest/achievement systems
//! - Tunable interaction radius and limit message
//!
//! # Example
//!
//! ```ignore
//! use ember_session::prelude::*;
//! use ember_items::{Inventory, StackRules};
//!
//! let (mut player, view) = Player::new(player_id, Inventory::new(8, 8));
//! let action = PickupAction::new(PickupConfig::default(), StackRules::default());
//!
//! match action.pickup(&mut player, &drops, drop_id) {
//!     Ok(success) => log::info!("picked up: {:?}", success),
//!     Err(reason) => log::debug!("pickup failed: {}", reason),
//! }
//! ```
//!
//! A player's own requests are serialized by the `&mut Player` they
//! require; the drop table is the only state shared across sessions.

pub mod config;
pub mod consume;
pub mod error;
pub mod hook;
pub mod pickup;
pub mod player;
pub mod view;

pub mod prelude {
    pub use crate::config::PickupConfig;
    pub use crate::consume::{consume_one, ConsumeOutcome};
    pub use crate::error::PickupError;
    pub use crate::hook::PickupObserver;
    pub use crate::pickup::{PickupAction, PickupSuccess};
    pub use crate::player::Player;
    pub use crate::view::{
        view_channel, ItemSnapshot, MessageSeverity, PickupFailReason, ViewNotification,
        ViewReceiver, ViewSender,
    };
}

pub use prelude::*;
