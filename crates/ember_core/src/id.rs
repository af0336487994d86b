//! Identifier types for players, drops, and item kinds

use core::fmt;
use core::sync::atomic::{AtomicU16, Ordering};
use serde::{Deserialize, Serialize};

/// Identifier of a connected player session
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u16);

impl PlayerId {
    /// Create a player id from its raw value
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-map identifier of a dropped object lying on the ground
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DropId(u16);

impl DropId {
    /// Create a drop id from its raw value
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for DropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DropId({})", self.0)
    }
}

impl fmt::Display for DropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog identity of an item kind as a (group, number) pair
///
/// The pair is configuration data: the stack whitelist and the item
/// catalog are both keyed by it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind {
    /// Item group (weapon, jewel, potion, ...)
    pub group: u8,
    /// Number within the group
    pub number: u16,
}

impl ItemKind {
    /// Create an item kind from its group and number
    #[inline]
    pub const fn new(group: u8, number: u16) -> Self {
        Self { group, number }
    }
}

impl fmt::Debug for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKind({}:{})", self.group, self.number)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.number)
    }
}

/// Thread-safe drop id generator
///
/// Ids wrap around; a map never holds anywhere near `u16::MAX` live drops,
/// so a wrapped id has long since left the table.
pub struct DropIdGenerator {
    next: AtomicU16,
}

impl DropIdGenerator {
    /// Create a new generator starting at zero
    pub const fn new() -> Self {
        Self {
            next: AtomicU16::new(0),
        }
    }

    /// Generate the next drop id
    pub fn next(&self) -> DropId {
        DropId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for DropIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
