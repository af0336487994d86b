//! Player session state

use crate::view::{view_channel, ViewReceiver, ViewSender};
use ember_core::PlayerId;
use ember_items::Inventory;
use ember_world::Position;

/// State owned by a single player's session
///
/// Requests for one player run one at a time through `&mut Player`; no
/// field here needs cross-player locking.
#[derive(Debug)]
pub struct Player {
    /// Session identity
    pub id: PlayerId,
    /// Current map position
    pub position: Position,
    /// Dead players cannot interact with drops
    pub alive: bool,
    /// Money balance
    pub money: u64,
    /// Main inventory
    pub inventory: Inventory,
    /// Outbound view notifications
    pub view: ViewSender,
}

impl Player {
    /// Create a session, returning the receiving half of its view channel
    pub fn new(id: PlayerId, inventory: Inventory) -> (Self, ViewReceiver) {
        let (view, receiver) = view_channel();
        (
            Self {
                id,
                position: Position::default(),
                alive: true,
                money: 0,
                inventory,
                view,
            },
            receiver,
        )
    }

    /// Set the map position
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Credit picked-up money to the balance
    pub fn credit_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_money() {
        let (mut player, _view) = Player::new(PlayerId::new(1), Inventory::new(8, 8));
        player.credit_money(150);
        player.credit_money(50);
        assert_eq!(player.money, 200);
    }

    #[test]
    fn test_credit_money_saturates() {
        let (mut player, _view) = Player::new(PlayerId::new(1), Inventory::new(8, 8));
        player.money = u64::MAX - 10;
        player.credit_money(100);
        assert_eq!(player.money, u64::MAX);
    }
}
