//! Container trait for item storage.

use steel_registry::{item_stack::ItemStack, items::ItemRegistry};

/// A trait for objects that can store items in slots.
///
/// This is the base abstraction for anything that holds items: dispensers,
/// player inventories and so on.
pub trait Container {
    /// Returns the number of slots in this container.
    fn size(&self) -> usize;

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.get_item(slot).is_empty())
    }

    /// Gets the item in the given slot.
    fn get_item(&self, slot: usize) -> &ItemStack;

    /// Gets a mutable reference to the item in the given slot.
    fn get_item_mut(&mut self, slot: usize) -> &mut ItemStack;

    /// Removes up to `count` items from the given slot and returns them.
    fn remove_item(&mut self, slot: usize, count: i32) -> ItemStack {
        let item = self.get_item_mut(slot);
        if item.is_empty() || count <= 0 {
            return ItemStack::empty();
        }
        let result = item.split(count);
        if !result.is_empty() {
            self.set_changed();
        }
        result
    }

    /// Sets the item in the given slot.
    fn set_item(&mut self, slot: usize, item: ItemStack);

    /// Returns the maximum stack size this container allows.
    fn max_stack_size(&self) -> i32 {
        64
    }

    /// Returns the maximum stack size for a specific item in this container.
    fn max_stack_size_for(&self, items: &ItemRegistry, item: &ItemStack) -> i32 {
        self.max_stack_size().min(item.max_stack_size(items))
    }

    /// Called when the container contents change.
    fn set_changed(&mut self);

    /// Merges `item` into existing stacks, then into empty slots.
    ///
    /// Whatever doesn't fit is left in `item`. Returns `true` if anything moved.
    fn add(&mut self, items: &ItemRegistry, item: &mut ItemStack) -> bool {
        if item.is_empty() {
            return false;
        }
        let original_count = item.count();

        for slot in 0..self.size() {
            if item.is_empty() {
                break;
            }
            let max_size = self.max_stack_size_for(items, item);
            let slot_item = self.get_item_mut(slot);
            if !slot_item.is_empty() && ItemStack::is_same_item_same_tags(slot_item, item) {
                let to_add = item.count().min(max_size - slot_item.count());
                if to_add > 0 {
                    slot_item.grow(to_add);
                    item.shrink(to_add);
                }
            }
        }

        for slot in 0..self.size() {
            if item.is_empty() {
                break;
            }
            if self.get_item(slot).is_empty() {
                let to_add = item.count().min(self.max_stack_size_for(items, item));
                let placed = item.split(to_add);
                self.set_item(slot, placed);
            }
        }

        let moved = item.count() < original_count;
        if moved {
            self.set_changed();
        }
        moved
    }
}
