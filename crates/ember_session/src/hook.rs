//! Post-pickup hook for external progress systems

use ember_core::PlayerId;
use ember_items::Item;

/// Collaborator notified when a player gains a brand-new holding
///
/// Quest and achievement systems implement this. It fires only when an
/// item is inserted as a new record, never when a dropped quantity merges
/// into a stack the player already held.
pub trait PickupObserver: Send + Sync {
    /// Called after the item has been placed in the player's inventory
    fn on_new_item_picked_up(&self, player: PlayerId, item: &Item);
}
