//! Player inventory implementation.

use steel_registry::{item_stack::ItemStack, items::ItemRegistry};
use steel_utils::InteractionHand;

use super::Container;

/// The number of main inventory slots.
pub const INVENTORY_SIZE: usize = 36;
/// The number of hotbar slots.
pub const HOTBAR_SIZE: usize = 9;

/// The player's inventory.
///
/// Contains 36 main slots (0-35), where slots 0-8 are the hotbar, plus the
/// offhand.
#[derive(Debug)]
pub struct PlayerInventory {
    items: [ItemStack; INVENTORY_SIZE],
    offhand: ItemStack,
    /// The currently selected hotbar slot (0-8).
    selected_slot: usize,
    times_changed: u32,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    /// Creates a new empty player inventory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: std::array::from_fn(|_| ItemStack::empty()),
            offhand: ItemStack::empty(),
            selected_slot: 0,
            times_changed: 0,
        }
    }

    /// Returns the currently selected hotbar slot index (0-8).
    #[must_use]
    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Sets the selected hotbar slot.
    ///
    /// # Panics
    /// Panics if `slot` is not in the range 0-8.
    pub fn set_selected_slot(&mut self, slot: usize) {
        assert!(slot < HOTBAR_SIZE, "Invalid hotbar slot: {slot}");
        self.selected_slot = slot;
    }

    /// Iterates over all slots, the offhand last.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.items.iter().chain(std::iter::once(&self.offhand))
    }

    /// Returns the item held in `hand`.
    #[must_use]
    pub fn item_in_hand(&self, hand: InteractionHand) -> &ItemStack {
        match hand {
            InteractionHand::MainHand => &self.items[self.selected_slot],
            InteractionHand::OffHand => &self.offhand,
        }
    }

    /// Returns a mutable reference to the item held in `hand`.
    pub fn item_in_hand_mut(&mut self, hand: InteractionHand) -> &mut ItemStack {
        match hand {
            InteractionHand::MainHand => &mut self.items[self.selected_slot],
            InteractionHand::OffHand => &mut self.offhand,
        }
    }

    /// Returns the number of times the inventory has been modified.
    #[must_use]
    pub fn times_changed(&self) -> u32 {
        self.times_changed
    }

    /// Finds the first empty slot.
    #[must_use]
    pub fn get_free_slot(&self) -> Option<usize> {
        self.items.iter().position(ItemStack::is_empty)
    }

    /// Finds a slot with remaining space for the given item, preferring the
    /// selected slot.
    #[must_use]
    pub fn get_slot_with_remaining_space(
        &self,
        items: &ItemRegistry,
        item: &ItemStack,
    ) -> Option<usize> {
        if self.has_remaining_space_for(items, &self.items[self.selected_slot], item) {
            return Some(self.selected_slot);
        }
        self.items
            .iter()
            .position(|slot_item| self.has_remaining_space_for(items, slot_item, item))
    }

    fn has_remaining_space_for(
        &self,
        items: &ItemRegistry,
        slot_item: &ItemStack,
        new_item: &ItemStack,
    ) -> bool {
        !slot_item.is_empty()
            && ItemStack::is_same_item_same_tags(slot_item, new_item)
            && slot_item.is_stackable(items)
            && slot_item.count() < self.max_stack_size_for(items, slot_item)
    }

    /// Tries to add an item to the inventory, merging with existing stacks first.
    ///
    /// Whatever doesn't fit is left in `item`. Returns `true` if at least some
    /// items were added.
    pub fn add(&mut self, items: &ItemRegistry, item: &mut ItemStack) -> bool {
        if item.is_empty() {
            return false;
        }
        let original_count = item.count();

        loop {
            let last_count = item.count();
            self.add_resource(items, item);
            if item.is_empty() || item.count() >= last_count {
                break;
            }
        }

        item.count() < original_count
    }

    fn add_resource(&mut self, items: &ItemRegistry, item: &mut ItemStack) {
        if let Some(slot) = self.get_slot_with_remaining_space(items, item) {
            self.add_resource_to_slot(items, slot, item);
        } else if let Some(slot) = self.get_free_slot() {
            self.add_resource_to_slot(items, slot, item);
        }
    }

    fn add_resource_to_slot(&mut self, items: &ItemRegistry, slot: usize, item: &mut ItemStack) {
        let max_size = self.max_stack_size_for(items, item);
        let slot_item = &mut self.items[slot];

        if slot_item.is_empty() {
            let to_add = item.count().min(max_size);
            *slot_item = item.split(to_add);
            self.set_changed();
        } else if ItemStack::is_same_item_same_tags(slot_item, item) {
            let to_add = item.count().min(max_size - slot_item.count());
            if to_add > 0 {
                slot_item.grow(to_add);
                item.shrink(to_add);
                self.set_changed();
            }
        }
    }
}

impl Container for PlayerInventory {
    fn size(&self) -> usize {
        INVENTORY_SIZE
    }

    fn get_item(&self, slot: usize) -> &ItemStack {
        &self.items[slot]
    }

    fn get_item_mut(&mut self, slot: usize) -> &mut ItemStack {
        &mut self.items[slot]
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) {
        self.items[slot] = item;
        self.set_changed();
    }

    fn set_changed(&mut self) {
        self.times_changed = self.times_changed.wrapping_add(1);
    }

    fn add(&mut self, items: &ItemRegistry, item: &mut ItemStack) -> bool {
        PlayerInventory::add(self, items, item)
    }
}
