//! Item storage: containers, the player inventory and item hand-out helpers.

mod container;
mod player_inventory;
mod simple_container;

pub use container::Container;
pub use player_inventory::{HOTBAR_SIZE, INVENTORY_SIZE, PlayerInventory};
pub use simple_container::SimpleContainer;

use steel_registry::{item_stack::ItemStack, items::ItemRegistry};

use crate::{player::Player, world::World};

/// Puts `stack` into the player's inventory and drops whatever doesn't fit
/// at the player's feet.
pub fn give_item_to_player(
    items: &ItemRegistry,
    world: &mut dyn World,
    player: &mut dyn Player,
    mut stack: ItemStack,
) {
    if stack.is_empty() {
        return;
    }
    player.inventory_mut().add(items, &mut stack);
    if !stack.is_empty() {
        log::debug!(
            "Inventory of {} is full, dropping {} x{}",
            player.uuid(),
            stack.item(),
            stack.count()
        );
        world.spawn_item(player.position(), stack);
    }
}
