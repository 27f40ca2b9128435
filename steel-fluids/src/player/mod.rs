//! The player as seen by item behaviors.

use steel_registry::item_stack::ItemStack;
use steel_utils::{BlockPos, Direction, Identifier, math::Vector3};
use uuid::Uuid;

use crate::inventory::PlayerInventory;

/// A statistic a player can be credited with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stat {
    /// The player used the item.
    Used(Identifier),
}

/// A player interacting with the world.
///
/// The server's player entity implements this, tests use an in-memory player.
pub trait Player {
    /// The player's UUID.
    fn uuid(&self) -> Uuid;

    /// The player's feet position.
    fn position(&self) -> Vector3<f64>;

    /// The position of the player's eyes.
    fn eye_position(&self) -> Vector3<f64>;

    /// The player's (yaw, pitch) in degrees.
    fn rotation(&self) -> (f32, f32);

    /// Creative players don't consume items.
    fn has_infinite_materials(&self) -> bool;

    /// Whether the player may use `stack` on the face of the block at `pos`.
    fn may_use_item_at(&self, pos: &BlockPos, face: Direction, stack: &ItemStack) -> bool;

    /// Increments a statistic.
    fn award_stat(&mut self, stat: Stat);

    /// Plays a sound only this player hears.
    fn play_sound(&mut self, sound: &Identifier, volume: f32, pitch: f32);

    /// The player's inventory.
    fn inventory_mut(&mut self) -> &mut PlayerInventory;
}
