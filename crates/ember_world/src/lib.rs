//! # ember_world - World Drops
//!
//! This crate provides the world-facing side of item acquisition.
//!
//! # Features
//!
//! - Grid positions with an interaction-range check
//! - Dropped entities (money or items) with spawn timestamps
//! - Per-map drop table with an atomic claim primitive
//! - Expiry sweep for drops nobody picked up
//!
//! The drop table is the only mutable state shared between player
//! sessions; its claim operation is a single check-and-remove step, so at
//! most one claim per drop ever succeeds.

pub mod drop;
pub mod map;
pub mod table;

pub mod prelude {
    pub use crate::drop::{DroppedEntity, DroppedKind};
    pub use crate::map::Position;
    pub use crate::table::DropTable;
}

pub use prelude::*;
