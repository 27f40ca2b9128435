//! What dispensers do with the items they fire.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::item_stack::ItemStack;
use steel_utils::{BlockPos, Direction, Identifier};

use crate::fluid::fluid_util;
use crate::host::Host;
use crate::inventory::Container;
use crate::world::World;

/// Number of slots in a dispenser inventory.
pub const DISPENSER_SLOT_COUNT: usize = 9;

/// A dispenser about to fire an item.
pub struct DispenseContext<'a> {
    /// Registries and behaviors.
    pub host: &'a Host,
    /// The world.
    pub world: &'a mut dyn World,
    /// The dispenser's position.
    pub pos: BlockPos,
    /// The direction the dispenser faces.
    pub facing: Direction,
    /// The dispenser's inventory.
    pub inventory: &'a mut dyn Container,
}

impl<'a> DispenseContext<'a> {
    /// Creates a context.
    pub fn new(
        host: &'a Host,
        world: &'a mut dyn World,
        pos: BlockPos,
        facing: Direction,
        inventory: &'a mut dyn Container,
    ) -> Self {
        Self {
            host,
            world,
            pos,
            facing,
            inventory,
        }
    }

    /// The block in front of the dispenser.
    #[must_use]
    pub fn target(&self) -> BlockPos {
        self.facing.relative(&self.pos)
    }

    /// Puts `stack` into the dispenser, dropping what doesn't fit in front of it.
    pub fn store_or_drop(&mut self, mut stack: ItemStack) {
        self.inventory.add(&self.host.registry().items, &mut stack);
        if !stack.is_empty() {
            let target = self.target();
            self.world.spawn_item(target.center(), stack);
        }
    }
}

/// Item-specific dispenser logic.
pub trait DispenseBehavior: Send + Sync {
    /// Fires `stack`, the contents of the chosen slot. Returns what the slot
    /// holds afterwards.
    fn dispense(&self, ctx: &mut DispenseContext<'_>, stack: ItemStack) -> ItemStack;
}

/// Drops a single item in front of the dispenser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DropItemBehavior;

impl DispenseBehavior for DropItemBehavior {
    fn dispense(&self, ctx: &mut DispenseContext<'_>, mut stack: ItemStack) -> ItemStack {
        let item = stack.split(1);
        let target = ctx.target();
        ctx.world.spawn_item(target.center(), item);
        stack
    }
}

/// Empties filled fluid containers into the world and fills empty ones from
/// it.
///
/// A filled container pours its contents into the block in front and leaves
/// the emptied container behind. An empty one picks up the liquid source in
/// front. If neither works, the item is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispenseFluidContainer;

impl DispenseFluidContainer {
    fn fill_container(ctx: &mut DispenseContext<'_>, mut stack: ItemStack) -> ItemStack {
        let host = ctx.host;
        let target = ctx.target();
        let Some(filled) = fluid_util::try_pick_up_fluid(
            host,
            &mut *ctx.world,
            None,
            &stack,
            target,
            ctx.facing.opposite(),
        ) else {
            return DropItemBehavior.dispense(ctx, stack);
        };

        stack.shrink(1);
        if stack.is_empty() {
            return filled;
        }
        ctx.store_or_drop(filled);
        stack
    }

    fn dump_container(ctx: &mut DispenseContext<'_>, mut stack: ItemStack) -> ItemStack {
        let host = ctx.host;
        let target = ctx.target();
        let mut emptied = stack.copy_with_count(1);

        let placed = {
            let Some(mut handler) = host.fluid_handler(&mut emptied) else {
                return DropItemBehavior.dispense(ctx, stack);
            };
            let Some(contents) = handler.drain_amount(i32::MAX, false) else {
                return DropItemBehavior.dispense(ctx, stack);
            };
            let placed =
                fluid_util::try_place_fluid(host, &mut *ctx.world, None, &contents, target);
            if placed {
                handler.drain_amount(i32::MAX, true);
            }
            placed
        };

        if !placed {
            return DropItemBehavior.dispense(ctx, stack);
        }

        stack.shrink(1);
        if stack.is_empty() {
            return emptied;
        }
        ctx.store_or_drop(emptied);
        stack
    }
}

impl DispenseBehavior for DispenseFluidContainer {
    fn dispense(&self, ctx: &mut DispenseContext<'_>, stack: ItemStack) -> ItemStack {
        if fluid_util::fluid_contained(ctx.host, &stack).is_some() {
            Self::dump_container(ctx, stack)
        } else {
            Self::fill_container(ctx, stack)
        }
    }
}

/// Maps items to their dispenser behavior. Unregistered items are dropped.
#[derive(Default)]
pub struct DispenserRegistry {
    behaviors: FxHashMap<Identifier, Arc<dyn DispenseBehavior>>,
}

impl DispenserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the behavior of `item`, replacing any previous one.
    pub fn register(&mut self, item: Identifier, behavior: Arc<dyn DispenseBehavior>) {
        if self.behaviors.insert(item.clone(), behavior).is_some() {
            log::warn!("Replaced the dispense behavior of {item}");
        }
    }

    /// The behavior used for `item`.
    #[must_use]
    pub fn behavior(&self, item: &Identifier) -> &dyn DispenseBehavior {
        match self.behaviors.get(item) {
            Some(behavior) => behavior.as_ref(),
            None => &DropItemBehavior,
        }
    }
}
