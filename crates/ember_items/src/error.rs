//! Error types for inventory storage

use thiserror::Error;

/// Inventory storage errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Slot index is outside the grid
    #[error("Slot {0} is out of bounds")]
    SlotOutOfBounds(u8),

    /// The item's footprint does not fit at the requested anchor slot
    #[error("Item does not fit at slot {0}")]
    DoesNotFit(u8),

    /// One of the covered cells is already occupied
    #[error("Slot {0} is occupied")]
    SlotOccupied(u8),
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
