//! The world as seen by item behaviors.

mod raytrace;

pub use raytrace::{BLOCK_INTERACTION_RANGE, ClipFluid, clip, get_start_and_end_pos};

use steel_registry::{blocks::BlockState, item_stack::ItemStack};
use steel_utils::{BlockPos, Identifier, UpdateFlags, math::Vector3};

use crate::player::Player;

/// Block access and side effects an item behavior needs from a world.
pub trait World {
    /// Returns the block state at `pos`, air outside the world.
    fn get_block_state(&self, pos: &BlockPos) -> BlockState;

    /// Sets a block. Returns `false` if nothing changed.
    fn set_block(&mut self, pos: BlockPos, state: BlockState, flags: UpdateFlags) -> bool;

    /// Breaks the block at `pos`, optionally dropping it as an item.
    fn destroy_block(&mut self, pos: &BlockPos, drop_block: bool) -> bool;

    /// Returns whether `pos` is inside the buildable height range.
    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool;

    /// Returns whether `player` may modify the block at `pos`, e.g. outside
    /// spawn protection.
    fn may_interact(&self, player: &dyn Player, pos: &BlockPos) -> bool;

    /// Ultra-warm dimensions boil water away.
    fn does_water_vaporize(&self) -> bool;

    /// Plays a sound at a block.
    fn play_sound(&mut self, sound: &Identifier, pos: BlockPos, volume: f32, pitch: f32);

    /// Drops an item entity at `pos`.
    fn spawn_item(&mut self, pos: Vector3<f64>, stack: ItemStack);
}
