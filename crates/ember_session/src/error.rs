//! Error types for item actions

use thiserror::Error;

/// Why a pickup request did not grant anything
///
/// Every variant is an expected, recoverable outcome; a client may simply
/// resend the request, which re-enters resolution fresh. A lost race is
/// deliberately indistinguishable from a vanished drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickupError {
    /// Drop vanished or contested, player ineligible, or no free slot
    #[error("Nothing to pick up")]
    General,

    /// The per-character storage limit for the item's kind is reached
    #[error("Storage limit reached")]
    LimitReached,
}
