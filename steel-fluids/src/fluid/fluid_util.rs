//! Helpers for filling, draining and placing fluids.
//!
//! These work on [`FluidHandler`]s, so item containers and fluid blocks in the
//! world are treated the same.

use steel_registry::{blocks::BlockState, fluid::FluidStack, item_stack::ItemStack};
use steel_utils::{BlockPos, Direction, Identifier, UpdateFlags};

use crate::capability::{FluidBlockWrapper, FluidHandler};
use crate::host::Host;
use crate::player::Player;
use crate::world::World;

/// Played when water boils away in an ultra-warm world.
pub const FIZZ_SOUND: Identifier = Identifier::vanilla_static("block.fire.extinguish");

/// Pours `resource` into the world at `pos`.
///
/// The fluid needs a block and the destination must be free, non-solid or
/// replaceable. Non-liquid blocks in the way are broken and dropped. In
/// worlds where water vaporizes, fluids that vaporize only make a fizz but
/// still count as placed.
pub fn try_place_fluid(
    host: &Host,
    world: &mut dyn World,
    player: Option<&dyn Player>,
    resource: &FluidStack,
    pos: BlockPos,
) -> bool {
    let Some(fluid) = host.registry().fluids.get(resource.fluid) else {
        return false;
    };
    let Some(fluid_block) = &fluid.block else {
        return false;
    };
    if !world.is_in_valid_bounds(&pos) {
        return false;
    }

    let destination = world.get_block_state(&pos);
    let config = host.registry().blocks.config(&destination.block);
    if config.solid && !config.replaceable {
        return false;
    }

    if world.does_water_vaporize() && fluid.vaporizes {
        world.play_sound(&FIZZ_SOUND, pos, 0.5, 2.6);
        return true;
    }

    if !config.is_air && !config.liquid {
        world.destroy_block(&pos, true);
    }

    world.play_sound(&fluid.empty_sound, pos, 1.0, 1.0);
    world.set_block(
        pos,
        BlockState::new(fluid_block.clone()),
        UpdateFlags::UPDATE_ALL_IMMEDIATE,
    );
    if let Some(player) = player {
        log::debug!("{} placed {} at {pos:?}", player.uuid(), fluid.name);
    }
    true
}

/// Fills a single item of `container` from the liquid block at `pos`.
///
/// Returns the filled container, or `None` if there is no liquid source, the
/// container has no fluid capability or it doesn't accept the fluid. The
/// block is removed and the player hears the fill sound on success.
pub fn try_pick_up_fluid(
    host: &Host,
    world: &mut dyn World,
    player: Option<&mut dyn Player>,
    container: &ItemStack,
    pos: BlockPos,
    face: Direction,
) -> Option<ItemStack> {
    if container.is_empty() {
        return None;
    }

    let state = world.get_block_state(&pos);
    if !host.registry().blocks.config(&state.block).liquid {
        return None;
    }

    log::debug!("Picking up {} at {pos:?} from {face:?}", state.block);
    let mut source = FluidBlockWrapper::new(world, host.registry(), pos)?;
    try_fill_container(host, container, &mut source, i32::MAX, player, true)
}

/// Fills a single item of `container` from `source`, taking at most
/// `max_amount`.
///
/// With `do_fill` unset only the returned copy is filled, `source` is left
/// untouched.
pub fn try_fill_container(
    host: &Host,
    container: &ItemStack,
    source: &mut dyn FluidHandler,
    max_amount: i32,
    player: Option<&mut dyn Player>,
    do_fill: bool,
) -> Option<ItemStack> {
    let mut filled = container.copy_with_count(1);

    let transferred = {
        let mut handler = host.fluid_handler(&mut filled)?;
        let simulated = try_fluid_transfer(handler.as_mut(), source, max_amount, false)?;
        if do_fill {
            try_fluid_transfer(handler.as_mut(), source, max_amount, true)?
        } else {
            handler.fill(&simulated, true);
            simulated
        }
    };

    if do_fill
        && let Some(player) = player
        && let Some(fluid) = host.registry().fluids.get(transferred.fluid)
    {
        player.play_sound(&fluid.fill_sound, 1.0, 1.0);
    }

    Some(filled)
}

/// Moves up to `max_amount` from `source` into `destination`.
///
/// Returns what was (or, with `do_transfer` unset, would be) moved. Nothing
/// changes unless both sides agree on a positive amount.
pub fn try_fluid_transfer(
    destination: &mut dyn FluidHandler,
    source: &mut dyn FluidHandler,
    max_amount: i32,
    do_transfer: bool,
) -> Option<FluidStack> {
    let drainable = source.drain_amount(max_amount, false)?;
    if drainable.amount <= 0 {
        return None;
    }

    let fillable = destination.fill(&drainable, false);
    if fillable <= 0 {
        return None;
    }

    let mut drained = source.drain_amount(fillable, do_transfer)?;
    drained.amount = destination.fill(&drained, do_transfer);
    Some(drained)
}

/// The fluid held by one item of `stack`, if it has a fluid capability.
#[must_use]
pub fn fluid_contained(host: &Host, stack: &ItemStack) -> Option<FluidStack> {
    if stack.is_empty() {
        return None;
    }
    let mut single = stack.copy_with_count(1);
    let mut handler = host.fluid_handler(&mut single)?;
    handler.drain_amount(i32::MAX, false)
}
