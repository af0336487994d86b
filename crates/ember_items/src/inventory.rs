//! Grid inventory container with footprint-aware slot allocation

use crate::error::{InventoryError, Result};
use crate::item::{Item, ItemDefinition};
use ember_core::ItemKind;

/// Ordered slot-grid container for item instances
///
/// Slots are addressed by anchor index (`y * width + x`); an item covers
/// the `width x height` cell rectangle of its definition starting at the
/// anchor. The grid holds at most 256 cells so a slot fits in a `u8`.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    width: u8,
    height: u8,
    slots: Vec<Option<Item>>,
}

impl Inventory {
    /// Create an empty inventory with the given grid dimensions
    pub fn new(width: u8, height: u8) -> Self {
        let cells = width as usize * height as usize;
        debug_assert!(cells <= 256, "slot indices are u8");
        Self {
            width,
            height,
            slots: vec![None; cells],
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored item records
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no items are stored
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Get the item anchored at a slot
    pub fn get(&self, slot: u8) -> Option<&Item> {
        self.slots.get(slot as usize)?.as_ref()
    }

    /// Get the item anchored at a slot, mutably
    pub fn get_mut(&mut self, slot: u8) -> Option<&mut Item> {
        self.slots.get_mut(slot as usize)?.as_mut()
    }

    /// Iterate over stored items with their anchor slots
    pub fn items(&self) -> impl Iterator<Item = (u8, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index as u8, item)))
    }

    /// Count stored item records of a kind
    ///
    /// Counts records, not units: one stack of 30 jewels is one holding.
    pub fn count_matching(&self, kind: ItemKind) -> u32 {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref())
            .filter(|item| item.kind() == kind)
            .count() as u32
    }

    /// Find the first stored item of a kind, mutably
    pub fn find_kind_mut(&mut self, kind: ItemKind) -> Option<&mut Item> {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.as_mut())
            .find(|item| item.kind() == kind)
    }

    /// Find the first anchor slot where the definition's footprint fits
    pub fn find_free_slot(&self, definition: &ItemDefinition) -> Option<u8> {
        let occupied = self.occupied_cells();
        let (item_w, item_h) = (definition.width, definition.height);
        if item_w > self.width || item_h > self.height {
            return None;
        }

        for y in 0..=(self.height - item_h) {
            for x in 0..=(self.width - item_w) {
                if self.rect_free(&occupied, x, y, item_w, item_h) {
                    return Some(y * self.width + x);
                }
            }
        }
        None
    }

    /// Place an item at an anchor slot
    ///
    /// The item's `slot` field is updated to the anchor on success.
    pub fn add(&mut self, mut item: Item, slot: u8) -> Result<()> {
        let (x, y) = self.cell_of(slot)?;
        let (item_w, item_h) = (item.definition.width, item.definition.height);
        if x as u16 + item_w as u16 > self.width as u16
            || y as u16 + item_h as u16 > self.height as u16
        {
            return Err(InventoryError::DoesNotFit(slot));
        }

        let occupied = self.occupied_cells();
        if !self.rect_free(&occupied, x, y, item_w, item_h) {
            return Err(InventoryError::SlotOccupied(slot));
        }

        item.slot = slot;
        self.slots[slot as usize] = Some(item);
        Ok(())
    }

    /// Remove and return the item anchored at a slot
    pub fn remove(&mut self, slot: u8) -> Option<Item> {
        self.slots.get_mut(slot as usize)?.take()
    }

    fn cell_of(&self, slot: u8) -> Result<(u8, u8)> {
        if (slot as usize) < self.slots.len() {
            Ok((slot % self.width, slot / self.width))
        } else {
            Err(InventoryError::SlotOutOfBounds(slot))
        }
    }

    fn rect_free(&self, occupied: &[bool], x: u8, y: u8, w: u8, h: u8) -> bool {
        for row in y..y + h {
            for col in x..x + w {
                if occupied[row as usize * self.width as usize + col as usize] {
                    return false;
                }
            }
        }
        true
    }

    fn occupied_cells(&self) -> Vec<bool> {
        let mut occupied = vec![false; self.slots.len()];
        for item in self.slots.iter().filter_map(|slot| slot.as_ref()) {
            let x = item.slot % self.width;
            let y = item.slot / self.width;
            for row in y..y + item.definition.height {
                for col in x..x + item.definition.width {
                    occupied[row as usize * self.width as usize + col as usize] = true;
                }
            }
        }
        occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDefinition;
    use std::sync::Arc;

    fn definition(group: u8, number: u16, w: u8, h: u8) -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition::new(ItemKind::new(group, number), "test").with_footprint(w, h))
    }

    #[test]
    fn test_add_and_get() {
        let mut inventory = Inventory::new(8, 8);
        let jewel = definition(14, 13, 1, 1);

        let slot = inventory.find_free_slot(&jewel).unwrap();
        inventory.add(Item::new(jewel, 3), slot).unwrap();

        let stored = inventory.get(slot).unwrap();
        assert_eq!(stored.count, 3);
        assert_eq!(stored.slot, slot);
        assert_eq!(inventory.item_count(), 1);
    }

    #[test]
    fn test_footprint_blocks_covered_cells() {
        let mut inventory = Inventory::new(4, 4);
        let sword = definition(0, 1, 2, 3);

        inventory.add(Item::new(Arc::clone(&sword), 1), 0).unwrap();

        // Anchor 1 sits inside the sword's 2x3 rectangle
        let result = inventory.add(Item::new(Arc::clone(&sword), 1), 1);
        assert_eq!(result, Err(InventoryError::SlotOccupied(1)));

        // Next free anchor for another 2x3 sword is column 2
        assert_eq!(inventory.find_free_slot(&sword), Some(2));
    }

    #[test]
    fn test_find_free_slot_when_full() {
        let mut inventory = Inventory::new(2, 1);
        let jewel = definition(14, 13, 1, 1);

        inventory.add(Item::new(Arc::clone(&jewel), 1), 0).unwrap();
        inventory.add(Item::new(Arc::clone(&jewel), 1), 1).unwrap();

        assert_eq!(inventory.find_free_slot(&jewel), None);
    }

    #[test]
    fn test_remove_frees_cells() {
        let mut inventory = Inventory::new(2, 3);
        let sword = definition(0, 1, 2, 3);

        inventory.add(Item::new(Arc::clone(&sword), 1), 0).unwrap();
        assert_eq!(inventory.find_free_slot(&sword), None);

        let removed = inventory.remove(0).unwrap();
        assert_eq!(removed.kind(), ItemKind::new(0, 1));
        assert_eq!(inventory.find_free_slot(&sword), Some(0));
    }

    #[test]
    fn test_count_matching_counts_records() {
        let mut inventory = Inventory::new(4, 1);
        let jewel = definition(14, 13, 1, 1);

        inventory.add(Item::new(Arc::clone(&jewel), 30), 0).unwrap();
        inventory.add(Item::new(Arc::clone(&jewel), 5), 1).unwrap();

        assert_eq!(inventory.count_matching(ItemKind::new(14, 13)), 2);
        assert_eq!(inventory.count_matching(ItemKind::new(14, 14)), 0);
    }

    #[test]
    fn test_out_of_bounds_slot() {
        let mut inventory = Inventory::new(2, 2);
        let jewel = definition(14, 13, 1, 1);

        let result = inventory.add(Item::new(jewel, 1), 9);
        assert_eq!(result, Err(InventoryError::SlotOutOfBounds(9)));
    }
}
