//! Per-player view notifications

use crossbeam_channel::{unbounded, Receiver, Sender};
use ember_core::ItemKind;
use ember_items::Item;

/// Reason carried by a pickup-failed notification
///
/// `ItemStacked` reports a successful merge through the failure channel:
/// the client learns that no new slot was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupFailReason {
    /// Drop gone, player ineligible, no free slot, or a lost race
    General,
    /// The dropped quantity was absorbed into an existing stack
    ItemStacked,
}

/// Severity of a user-facing text message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    /// Informational notice
    Info,
    /// Warning the player should act on
    Warning,
}

/// Plain-data description of an item as the client should display it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSnapshot {
    /// Anchor slot within the player's inventory
    pub slot: u8,
    /// Catalog identity
    pub kind: ItemKind,
    /// Enhancement level
    pub level: u8,
    /// Unit count
    pub count: u32,
}

impl ItemSnapshot {
    /// Capture the client-visible state of an item
    pub fn of(item: &Item) -> Self {
        Self {
            slot: item.slot,
            kind: item.kind(),
            level: item.level,
            count: item.count,
        }
    }
}

/// Outbound message keeping a client's view synchronized with the server
///
/// Clients reconcile optimistic local UI changes against these, so the
/// order they are sent in is part of each operation's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNotification {
    /// An item is (still) present in the given slot
    ItemAppeared(ItemSnapshot),
    /// The given slot is now empty
    ItemRemoved { slot: u8 },
    /// An item's unit count changed in place
    ItemCountChanged { item: ItemSnapshot, is_new: bool },
    /// An in-flight drag/move of the item failed; the client resets its cursor
    ItemMoveFailed { slot: u8 },
    /// A pickup request did not fill a new slot
    PickupFailed(PickupFailReason),
    /// Free-text message shown to the player
    Message {
        text: String,
        severity: MessageSeverity,
    },
}

/// Create a connected sender/receiver pair for one player's view
pub fn view_channel() -> (ViewSender, ViewReceiver) {
    let (sender, receiver) = unbounded();
    (ViewSender { sender }, ViewReceiver { receiver })
}

/// Fire-and-forget sending half of a player's view channel
///
/// Sends never block and never fail the operation that produced them; a
/// disconnected client just stops receiving.
#[derive(Debug, Clone)]
pub struct ViewSender {
    sender: Sender<ViewNotification>,
}

impl ViewSender {
    /// Queue a notification for delivery
    pub fn send(&self, notification: ViewNotification) {
        if self.sender.send(notification).is_err() {
            log::debug!("View channel closed, notification dropped");
        }
    }
}

/// Receiving half of a player's view channel, FIFO ordered
#[derive(Debug)]
pub struct ViewReceiver {
    receiver: Receiver<ViewNotification>,
}

impl ViewReceiver {
    /// Take the next pending notification, if any
    pub fn try_recv(&self) -> Option<ViewNotification> {
        self.receiver.try_recv().ok()
    }

    /// Take all pending notifications in send order
    pub fn drain(&self) -> Vec<ViewNotification> {
        let mut notifications = Vec::new();
        while let Ok(notification) = self.receiver.try_recv() {
            notifications.push(notification);
        }
        notifications
    }

    /// Number of pending notifications
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Check if no notifications are pending
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
