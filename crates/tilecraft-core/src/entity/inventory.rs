use serde::{Deserialize, Serialize};
use tilecraft_blocks::MAX_STACK;

/// A stack of items in an inventory slot
///
/// `item_id == 0` means empty, and an empty slot always has `count == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub item_id: u16,
    pub count: u32,
}

impl Slot {
    pub const EMPTY: Slot = Slot {
        item_id: 0,
        count: 0,
    };

    /// Create a slot, normalizing either zero field to `Slot::EMPTY`
    pub fn new(item_id: u16, count: u32) -> Self {
        if item_id == 0 || count == 0 {
            Self::EMPTY
        } else {
            Slot {
                item_id,
                count: count.min(MAX_STACK),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_id == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= MAX_STACK
    }

    /// Whether one more unit of `item_id` fits in this slot
    pub fn can_accept(&self, item_id: u16) -> bool {
        item_id != 0 && (self.is_empty() || (self.item_id == item_id && !self.is_full()))
    }
}

/// Player inventory: fixed slots, the leading ones forming the hotbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Slot>,
    hotbar_slots: usize,
    active_slot: usize,
}

impl Inventory {
    /// Create an empty inventory
    ///
    /// `hotbar_slots` is clamped into `1..=slots`.
    pub fn new(slots: usize, hotbar_slots: usize) -> Self {
        let slots = slots.max(1);
        Inventory {
            slots: vec![Slot::EMPTY; slots],
            hotbar_slots: hotbar_slots.clamp(1, slots),
            active_slot: 0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `index` (empty for indices past the end)
    pub fn slot(&self, index: usize) -> Slot {
        self.slots.get(index).copied().unwrap_or(Slot::EMPTY)
    }

    pub fn hotbar_slots(&self) -> usize {
        self.hotbar_slots
    }

    pub fn active_slot_index(&self) -> usize {
        self.active_slot
    }

    pub fn active_slot(&self) -> Slot {
        self.slot(self.active_slot)
    }

    /// Select a hotbar slot, clamping out-of-range indices to the last one
    pub fn select_slot(&mut self, index: usize) {
        self.active_slot = index.min(self.hotbar_slots.saturating_sub(1));
    }

    /// Select the next hotbar slot, wrapping around
    pub fn select_next_slot(&mut self) {
        self.active_slot = (self.active_slot + 1) % self.hotbar_slots.max(1);
    }

    /// Select the previous hotbar slot, wrapping around
    pub fn select_prev_slot(&mut self) {
        let hotbar = self.hotbar_slots.max(1);
        self.active_slot = (self.active_slot + hotbar - 1) % hotbar;
    }

    /// Add one unit of `item_id` to slot 0 if it is empty or holds the same item
    ///
    /// Returns false (and changes nothing) when slot 0 holds a different item
    /// or a full stack.
    pub fn deposit_into_first_slot(&mut self, item_id: u16) -> bool {
        let Some(first) = self.slots.first_mut() else {
            return false;
        };
        if !first.can_accept(item_id) {
            return false;
        }

        *first = Slot::new(item_id, first.count + 1);
        true
    }

    /// Remove one unit from the active slot and return its item id
    pub fn take_one_from_active(&mut self) -> Option<u16> {
        let slot = self.slots.get_mut(self.active_slot)?;
        if slot.is_empty() {
            return None;
        }

        let item_id = slot.item_id;
        *slot = Slot::new(item_id, slot.count - 1);
        Some(item_id)
    }

    /// Overwrite a slot (ignored past the end)
    pub fn set_slot(&mut self, index: usize, item_id: u16, count: u32) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::new(item_id, count);
        }
    }

    /// Count how many of a specific item are held across all slots
    pub fn count_item(&self, item_id: u16) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.item_id == item_id && !slot.is_empty())
            .map(|slot| slot.count)
            .sum()
    }

    /// Total units held across all slots
    pub fn total_items(&self) -> u32 {
        self.slots.iter().map(|slot| slot.count).sum()
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.fill(Slot::EMPTY);
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(30, 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_normalization() {
        assert_eq!(Slot::new(3, 0), Slot::EMPTY);
        assert_eq!(Slot::new(0, 5), Slot::EMPTY);
        assert_eq!(Slot::new(3, 2), Slot { item_id: 3, count: 2 });
        assert_eq!(Slot::new(3, 5000).count, MAX_STACK);
    }

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::default();
        assert_eq!(inventory.slots().len(), 30);
        assert_eq!(inventory.hotbar_slots(), 9);
        assert_eq!(inventory.active_slot_index(), 0);
        assert_eq!(inventory.total_items(), 0);
        assert!(inventory.slots().iter().all(|s| *s == Slot::EMPTY));
    }

    #[test]
    fn test_deposit_into_empty_first_slot() {
        let mut inventory = Inventory::default();
        assert!(inventory.deposit_into_first_slot(3));
        assert!(inventory.deposit_into_first_slot(3));
        assert_eq!(inventory.slot(0), Slot { item_id: 3, count: 2 });
    }

    #[test]
    fn test_deposit_rejected_by_other_item() {
        let mut inventory = Inventory::default();
        inventory.set_slot(0, 2, 4);
        assert!(!inventory.deposit_into_first_slot(3));
        assert_eq!(inventory.slot(0), Slot { item_id: 2, count: 4 });
        // Only slot 0 is ever considered
        assert_eq!(inventory.count_item(3), 0);
    }

    #[test]
    fn test_deposit_rejected_when_full() {
        let mut inventory = Inventory::default();
        inventory.set_slot(0, 3, MAX_STACK);
        assert!(!inventory.deposit_into_first_slot(3));
        assert_eq!(inventory.slot(0).count, MAX_STACK);
    }

    #[test]
    fn test_take_one_normalizes_to_empty() {
        let mut inventory = Inventory::default();
        inventory.set_slot(0, 21, 1);

        assert_eq!(inventory.take_one_from_active(), Some(21));
        assert_eq!(inventory.slot(0), Slot::EMPTY);
        assert_eq!(inventory.take_one_from_active(), None);
    }

    #[test]
    fn test_take_one_uses_active_slot() {
        let mut inventory = Inventory::default();
        inventory.set_slot(0, 2, 5);
        inventory.set_slot(3, 3, 2);
        inventory.select_slot(3);

        assert_eq!(inventory.take_one_from_active(), Some(3));
        assert_eq!(inventory.slot(3).count, 1);
        assert_eq!(inventory.slot(0).count, 5);
    }

    #[test]
    fn test_select_slot_clamps_to_hotbar() {
        let mut inventory = Inventory::default();
        inventory.select_slot(4);
        assert_eq!(inventory.active_slot_index(), 4);
        inventory.select_slot(20);
        assert_eq!(inventory.active_slot_index(), 8);
    }

    #[test]
    fn test_slot_cycling_wraps() {
        let mut inventory = Inventory::new(30, 9);
        inventory.select_prev_slot();
        assert_eq!(inventory.active_slot_index(), 8);
        inventory.select_next_slot();
        assert_eq!(inventory.active_slot_index(), 0);
        inventory.select_next_slot();
        assert_eq!(inventory.active_slot_index(), 1);
    }

    #[test]
    fn test_count_and_total() {
        let mut inventory = Inventory::default();
        inventory.set_slot(0, 2, 5);
        inventory.set_slot(4, 2, 3);
        inventory.set_slot(7, 100, 1);
        assert_eq!(inventory.count_item(2), 8);
        assert_eq!(inventory.count_item(100), 1);
        assert_eq!(inventory.total_items(), 9);

        inventory.clear();
        assert_eq!(inventory.total_items(), 0);
    }

    #[test]
    fn test_set_slot_past_end_is_ignored() {
        let mut inventory = Inventory::new(3, 3);
        inventory.set_slot(10, 2, 5);
        assert_eq!(inventory.total_items(), 0);
        assert_eq!(inventory.slot(10), Slot::EMPTY);
    }
}
