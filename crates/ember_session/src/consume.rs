//! One-unit consumption of held items

use crate::view::{ItemSnapshot, ViewNotification, ViewSender};
use ember_items::{Inventory, StackRules};

/// How a consume request mutated the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// One unit was taken from a stack; the record and its slot survive
    Decremented,
    /// The last (or only) unit was consumed; the record is gone
    Removed,
}

/// Consume exactly one unit of the item anchored at `slot`
///
/// Used for "use item" actions on potions, scrolls, and stackable jewels.
/// The caller has already validated that the action is legal for the item;
/// an empty `slot` is a caller contract violation and returns `None`
/// without emitting anything.
///
/// With `clear_cursor_first`, the view first receives a move-failed
/// notification for the item. Clients keep an optimistic drag state, and
/// without the reset the consumed item appears stuck to the cursor.
///
/// A stack with more than one unit is decremented in place: the view is
/// told the item (still) exists, then its new count. Some clients hide a
/// used item locally, and the pair of notifications undoes that. The last
/// unit removes the record and empties its slot instead.
pub fn consume_one(
    view: &ViewSender,
    rules: &StackRules,
    container: &mut Inventory,
    slot: u8,
    clear_cursor_first: bool,
) -> Option<ConsumeOutcome> {
    let decrement = {
        let item = container.get(slot)?;
        rules.is_stackable_item(item) && item.count > 1
    };

    if clear_cursor_first {
        view.send(ViewNotification::ItemMoveFailed { slot });
    }

    if decrement {
        let item = container.get_mut(slot)?;
        item.count -= 1;
        let snapshot = ItemSnapshot::of(item);
        view.send(ViewNotification::ItemAppeared(snapshot));
        view.send(ViewNotification::ItemCountChanged {
            item: snapshot,
            is_new: false,
        });
        Some(ConsumeOutcome::Decremented)
    } else {
        let removed = container.remove(slot)?;
        view.send(ViewNotification::ItemRemoved { slot });
        log::debug!("Consumed last unit of {} from slot {}", removed.kind(), slot);
        Some(ConsumeOutcome::Removed)
    }
}
