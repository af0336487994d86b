//! Pickup resolution for world drops

use crate::config::PickupConfig;
use crate::error::PickupError;
use crate::hook::PickupObserver;
use crate::player::Player;
use crate::view::{ItemSnapshot, MessageSeverity, PickupFailReason, ViewNotification};
use ember_core::DropId;
use ember_items::{Item, StackRules};
use ember_world::{DropTable, DroppedEntity, DroppedKind};
use std::sync::Arc;

/// What a successful pickup granted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupSuccess {
    /// Money credited to the session balance
    Money(u32),
    /// The dropped quantity merged into a stack the player already held
    Stacked,
    /// The item was inserted as a brand-new holding
    NewItem,
}

/// Resolves pickup requests against a map's drop table
///
/// One instance serves any number of sessions; it owns no player state.
pub struct PickupAction {
    config: PickupConfig,
    rules: StackRules,
    observer: Option<Arc<dyn PickupObserver>>,
}

impl PickupAction {
    /// Create a resolver with the given tuning and stacking rules
    pub fn new(config: PickupConfig, rules: StackRules) -> Self {
        Self {
            config,
            rules,
            observer: None,
        }
    }

    /// Attach the post-pickup observer
    pub fn with_observer(mut self, observer: Arc<dyn PickupObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Resolve a pickup request into exactly one outcome
    ///
    /// Money credited, quantity merged into an existing stack, item
    /// inserted as a new holding, or failure. Each outcome sends a fixed
    /// notification sequence; clients rely on the order to reconcile
    /// their optimistic UI state.
    ///
    /// The race between players targeting the same drop is settled by the
    /// drop table's atomic claim: only the winner observes the entity,
    /// every other resolver takes the failure path.
    pub fn pickup(
        &self,
        player: &mut Player,
        drops: &DropTable,
        drop_id: DropId,
    ) -> Result<PickupSuccess, PickupError> {
        let Some(entity) = drops.get(drop_id) else {
            return self.fail_general(player);
        };

        if !self.can_pickup(player, &entity) {
            return self.fail_general(player);
        }

        match entity.kind {
            DroppedKind::Money(amount) => self.pickup_money(player, drops, drop_id, amount),
            DroppedKind::Item(item) => self.pickup_item(player, drops, drop_id, item),
        }
    }

    /// Alive and within the interaction radius of the drop
    fn can_pickup(&self, player: &Player, entity: &DroppedEntity) -> bool {
        player.alive && player.position.in_range(entity.position, self.config.interaction_radius)
    }

    fn pickup_money(
        &self,
        player: &mut Player,
        drops: &DropTable,
        drop_id: DropId,
        amount: u32,
    ) -> Result<PickupSuccess, PickupError> {
        if drops.claim(drop_id).is_none() {
            return self.fail_general(player);
        }

        player.credit_money(amount);
        log::debug!("Player {} picked up {} money", player.id, amount);
        Ok(PickupSuccess::Money(amount))
    }

    fn pickup_item(
        &self,
        player: &mut Player,
        drops: &DropTable,
        drop_id: DropId,
        dropped: Item,
    ) -> Result<PickupSuccess, PickupError> {
        // Merging comes before every slot and limit check: restocking an
        // existing stack fills no new slot and creates no new holding.
        let stack_target = if self.rules.is_stackable_item(&dropped) {
            player
                .inventory
                .find_kind_mut(dropped.kind())
                .map(|target| target.slot)
        } else {
            None
        };

        if let Some(target_slot) = stack_target {
            return self.merge_into_stack(player, drops, drop_id, &dropped, target_slot);
        }

        // The storage limit caps distinct holdings of a kind; it applies
        // only when the pickup would create a new record.
        let limit = dropped.definition.storage_limit;
        if limit > 0 && player.inventory.count_matching(dropped.kind()) >= limit {
            let text = self.config.limit_message_for(&dropped.display_name());
            player.view.send(ViewNotification::Message {
                text,
                severity: MessageSeverity::Info,
            });
            return Err(PickupError::LimitReached);
        }

        let Some(slot) = player.inventory.find_free_slot(&dropped.definition) else {
            return self.fail_general(player);
        };

        if drops.claim(drop_id).is_none() {
            return self.fail_general(player);
        }

        // Drop entries are immutable once inserted, so the snapshot taken
        // at lookup is the claimed item.
        if player.inventory.add(dropped, slot).is_err() {
            // The slot was computed free under this same exclusive borrow.
            log::warn!("Player {} lost a claimed drop to a full slot", player.id);
            return self.fail_general(player);
        }

        if let Some(stored) = player.inventory.get(slot) {
            player
                .view
                .send(ViewNotification::ItemAppeared(ItemSnapshot::of(stored)));
            log::debug!(
                "Player {} picked up {} into slot {}",
                player.id,
                stored.kind(),
                slot
            );
            if let Some(observer) = &self.observer {
                observer.on_new_item_picked_up(player.id, stored);
            }
        }

        Ok(PickupSuccess::NewItem)
    }

    fn merge_into_stack(
        &self,
        player: &mut Player,
        drops: &DropTable,
        drop_id: DropId,
        dropped: &Item,
        target_slot: u8,
    ) -> Result<PickupSuccess, PickupError> {
        if drops.claim(drop_id).is_none() {
            // A stack target existed but another session won the drop;
            // new-item logic must not run in this case.
            return self.fail_general(player);
        }

        let snapshot = match player.inventory.get_mut(target_slot) {
            Some(target) => {
                target.count = target.count.saturating_add(dropped.count);
                ItemSnapshot::of(target)
            }
            // The target slot was read under this same exclusive borrow.
            None => return self.fail_general(player),
        };

        player
            .view
            .send(ViewNotification::PickupFailed(PickupFailReason::ItemStacked));
        player.view.send(ViewNotification::ItemCountChanged {
            item: snapshot,
            is_new: false,
        });
        log::debug!(
            "Player {} stacked {} onto slot {}",
            player.id,
            dropped.kind(),
            target_slot
        );
        Ok(PickupSuccess::Stacked)
    }

    fn fail_general(&self, player: &Player) -> Result<PickupSuccess, PickupError> {
        player
            .view
            .send(ViewNotification::PickupFailed(PickupFailReason::General));
        Err(PickupError::General)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::{ItemKind, PlayerId};
    use ember_items::{Inventory, ItemDefinition};
    use ember_world::Position;
    use std::sync::atomic::{AtomicU32, Ordering};

    const BLESS: ItemKind = ItemKind::new(14, 13);

    fn bless() -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition::new(BLESS, "Jewel of Bless"))
    }

    fn sword() -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition::new(ItemKind::new(0, 5), "Blade").with_footprint(1, 3))
    }

    fn action() -> PickupAction {
        PickupAction::new(PickupConfig::default(), StackRules::default())
    }

    fn player_at(x: u16, y: u16) -> (Player, crate::view::ViewReceiver) {
        let (player, receiver) = Player::new(PlayerId::new(1), Inventory::new(8, 8));
        (player.with_position(Position::new(x, y)), receiver)
    }

    fn drop_at(drops: &DropTable, item: Item, x: u16, y: u16) -> DropId {
        drops.insert(DroppedEntity::item(item, Position::new(x, y)))
    }

    #[derive(Default)]
    struct CountingObserver {
        new_items: AtomicU32,
    }

    impl PickupObserver for CountingObserver {
        fn on_new_item_picked_up(&self, _player: PlayerId, _item: &Item) {
            self.new_items.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_missing_drop_fails_general() {
        let drops = DropTable::new();
        let (mut player, receiver) = player_at(0, 0);

        let result = action().pickup(&mut player, &drops, DropId::new(99));
        assert_eq!(result, Err(PickupError::General));
        assert_eq!(
            receiver.drain(),
            vec![ViewNotification::PickupFailed(PickupFailReason::General)]
        );
    }

    #[test]
    fn test_out_of_range_leaves_drop_unclaimed() {
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(bless(), 1), 10, 10);
        // Distance 5 against the default radius of 3
        let (mut player, receiver) = player_at(15, 10);

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Err(PickupError::General));
        assert!(drops.get(id).is_some());
        assert_eq!(
            receiver.drain(),
            vec![ViewNotification::PickupFailed(PickupFailReason::General)]
        );
    }

    #[test]
    fn test_dead_player_cannot_pick_up() {
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(bless(), 1), 0, 0);
        let (mut player, _receiver) = player_at(0, 0);
        player.alive = false;

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Err(PickupError::General));
        assert!(drops.get(id).is_some());
    }

    #[test]
    fn test_money_is_credited() {
        let drops = DropTable::new();
        let id = drops.insert(DroppedEntity::money(250, Position::new(1, 1)));
        let (mut player, receiver) = player_at(0, 0);

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Ok(PickupSuccess::Money(250)));
        assert_eq!(player.money, 250);
        assert!(drops.is_empty());
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_merge_into_held_stack() {
        let observer = Arc::new(CountingObserver::default());
        let action = action().with_observer(Arc::clone(&observer) as Arc<dyn PickupObserver>);

        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(bless(), 1), 0, 0);

        let (mut player, receiver) = player_at(0, 0);
        player.inventory.add(Item::new(bless(), 3), 20).unwrap();

        let result = action.pickup(&mut player, &drops, id);
        assert_eq!(result, Ok(PickupSuccess::Stacked));

        // Count merged, no new record, drop gone, hook not invoked
        assert_eq!(player.inventory.get(20).unwrap().count, 4);
        assert_eq!(player.inventory.item_count(), 1);
        assert!(drops.is_empty());
        assert_eq!(observer.new_items.load(Ordering::SeqCst), 0);

        let expected = ItemSnapshot {
            slot: 20,
            kind: BLESS,
            level: 0,
            count: 4,
        };
        assert_eq!(
            receiver.drain(),
            vec![
                ViewNotification::PickupFailed(PickupFailReason::ItemStacked),
                ViewNotification::ItemCountChanged {
                    item: expected,
                    is_new: false,
                },
            ]
        );
    }

    #[test]
    fn test_merge_needs_no_free_slot() {
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(bless(), 1), 0, 0);

        // A 1x1 inventory holding the stack: zero free cells
        let (player, _receiver) = Player::new(PlayerId::new(1), Inventory::new(1, 1));
        let mut player = player.with_position(Position::new(0, 0));
        player.inventory.add(Item::new(bless(), 2), 0).unwrap();

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Ok(PickupSuccess::Stacked));
        assert_eq!(player.inventory.get(0).unwrap().count, 3);
    }

    #[test]
    fn test_merge_wins_over_storage_limit() {
        let limited = Arc::new(
            ItemDefinition::new(BLESS, "Jewel of Bless").with_storage_limit(1),
        );
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(Arc::clone(&limited), 1), 0, 0);

        let (mut player, _receiver) = player_at(0, 0);
        // Already at the limit of one holding; merging must still succeed
        player.inventory.add(Item::new(limited, 5), 0).unwrap();

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Ok(PickupSuccess::Stacked));
        assert_eq!(player.inventory.get(0).unwrap().count, 6);
    }

    #[test]
    fn test_storage_limit_blocks_new_holding() {
        let limited = Arc::new(
            ItemDefinition::new(ItemKind::new(0, 5), "Blade").with_storage_limit(2),
        );
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(Arc::clone(&limited), 1).with_level(5), 0, 0);

        let (mut player, receiver) = player_at(0, 0);
        player
            .inventory
            .add(Item::new(Arc::clone(&limited), 1), 0)
            .unwrap();
        player.inventory.add(Item::new(limited, 1), 1).unwrap();

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Err(PickupError::LimitReached));
        // The drop survives a refused pickup
        assert!(drops.get(id).is_some());

        let drained = receiver.drain();
        assert_eq!(drained.len(), 1);
        match &drained[0] {
            ViewNotification::Message { text, severity } => {
                assert_eq!(text, "Limit reached for 'Blade +5'.");
                assert_eq!(*severity, MessageSeverity::Info);
            }
            other => panic!("unexpected notification: {:?}", other),
        }
    }

    #[test]
    fn test_full_inventory_fails_and_keeps_drop() {
        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(bless(), 1), 0, 0);

        // Full 1x1 inventory holding a non-matching kind: no merge target
        let (player, receiver) = Player::new(PlayerId::new(1), Inventory::new(1, 1));
        let mut player = player.with_position(Position::new(0, 0));
        player
            .inventory
            .add(Item::new(Arc::new(ItemDefinition::new(ItemKind::new(7, 1), "Helm")), 1), 0)
            .unwrap();

        let result = action().pickup(&mut player, &drops, id);
        assert_eq!(result, Err(PickupError::General));
        // Unclaimed: another player may still take it
        assert!(drops.get(id).is_some());
        assert_eq!(
            receiver.drain(),
            vec![ViewNotification::PickupFailed(PickupFailReason::General)]
        );
    }

    #[test]
    fn test_new_item_invokes_hook() {
        let observer = Arc::new(CountingObserver::default());
        let action = action().with_observer(Arc::clone(&observer) as Arc<dyn PickupObserver>);

        let drops = DropTable::new();
        let id = drop_at(&drops, Item::new(sword(), 1), 0, 0);
        let (mut player, receiver) = player_at(0, 0);

        let result = action.pickup(&mut player, &drops, id);
        assert_eq!(result, Ok(PickupSuccess::NewItem));
        assert!(drops.is_empty());
        assert_eq!(observer.new_items.load(Ordering::SeqCst), 1);

        let stored_slot = player.inventory.items().next().unwrap().0;
        assert_eq!(
            receiver.drain(),
            vec![ViewNotification::ItemAppeared(ItemSnapshot {
                slot: stored_slot,
                kind: ItemKind::new(0, 5),
                level: 0,
                count: 1,
            })]
        );
    }

    #[test]
    fn test_racing_players_claim_once() {
        let observer = Arc::new(CountingObserver::default());
        let action = Arc::new(
            action().with_observer(Arc::clone(&observer) as Arc<dyn PickupObserver>),
        );

        let drops = Arc::new(DropTable::new());
        let id = drop_at(&drops, Item::new(sword(), 1), 0, 0);

        let handles: Vec<_> = (0..4u16)
            .map(|index| {
                let action = Arc::clone(&action);
                let drops = Arc::clone(&drops);
                std::thread::spawn(move || {
                    let (player, _receiver) =
                        Player::new(PlayerId::new(index), Inventory::new(8, 8));
                    let mut player = player.with_position(Position::new(0, 0));
                    action.pickup(&mut player, &drops, id).is_ok()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(observer.new_items.load(Ordering::SeqCst), 1);
        assert!(drops.is_empty());
    }

    #[test]
    fn test_racing_stackers_merge_once() {
        let drops = Arc::new(DropTable::new());
        let id = drop_at(&drops, Item::new(bless(), 1), 0, 0);

        let handles: Vec<_> = (0..4u16)
            .map(|index| {
                let drops = Arc::clone(&drops);
                std::thread::spawn(move || {
                    let (player, _receiver) =
                        Player::new(PlayerId::new(index), Inventory::new(8, 8));
                    let mut player = player.with_position(Position::new(0, 0));
                    player.inventory.add(Item::new(bless(), 3), 0).unwrap();

                    let result = action().pickup(&mut player, &drops, id);
                    (result.is_ok(), player.inventory.get(0).unwrap().count)
                })
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        let wins = results.iter().filter(|(won, _)| *won).count();
        assert_eq!(wins, 1);
        // Exactly one stack grew; the losers' stacks are untouched
        assert_eq!(results.iter().filter(|(_, count)| *count == 4).count(), 1);
        assert_eq!(results.iter().filter(|(_, count)| *count == 3).count(), 3);
    }
}
