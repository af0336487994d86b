//! Dropped entities lying on the ground

use crate::map::Position;
use ember_items::Item;
use std::time::{Duration, Instant};

/// What a drop grants when claimed
#[derive(Debug, Clone)]
pub enum DroppedKind {
    /// A money amount
    Money(u32),
    /// An item instance
    Item(Item),
}

/// A world-visible claimable object
///
/// Entries are immutable once inserted into a drop table; the only state
/// transition a drop ever undergoes is removal, either through a claim or
/// through the expiry sweep.
#[derive(Debug, Clone)]
pub struct DroppedEntity {
    /// What the drop grants
    pub kind: DroppedKind,
    /// Where the drop lies
    pub position: Position,
    /// When the drop appeared
    pub dropped_at: Instant,
}

impl DroppedEntity {
    /// Create a money drop
    pub fn money(amount: u32, position: Position) -> Self {
        Self {
            kind: DroppedKind::Money(amount),
            position,
            dropped_at: Instant::now(),
        }
    }

    /// Create an item drop
    pub fn item(item: Item, position: Position) -> Self {
        Self {
            kind: DroppedKind::Item(item),
            position,
            dropped_at: Instant::now(),
        }
    }

    /// How long the drop has been lying on the ground
    pub fn age(&self) -> Duration {
        self.dropped_at.elapsed()
    }
}
