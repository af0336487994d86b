//! # ember_core - Ember Server Core
//!
//! Foundational identifier types shared by every server crate:
//! - Player and drop identifiers
//! - Item kind identity (group + number catalog pair)
//! - Thread-safe drop id generation

pub mod id;

pub use id::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::id::{DropId, DropIdGenerator, ItemKind, PlayerId};
}
