//! Context types passed to item behaviors and event listeners.

use steel_registry::item_stack::ItemStack;
use steel_utils::{BlockPos, Direction, InteractionHand, math::Vector3};
use uuid::Uuid;

use crate::{host::Host, player::Player, world::World};

/// The outcome of using an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Nothing happened, let other handlers try.
    Pass,
    /// The interaction happened.
    Success,
    /// The interaction was attempted and refused.
    Fail,
}

impl InteractionResult {
    /// Whether the interaction consumed the input.
    #[must_use]
    pub const fn consumes_action(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A block hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHitResult {
    /// The block that was hit.
    pub block_pos: BlockPos,
    /// The face of the block that was hit.
    pub direction: Direction,
    /// Where exactly the ray hit.
    pub location: Vector3<f64>,
}

/// What a player aimed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitResult {
    /// Nothing in reach.
    Miss,
    /// A block.
    Block(BlockHitResult),
    /// An entity.
    Entity(Uuid),
}

impl HitResult {
    /// The block hit, if this is a block hit.
    #[must_use]
    pub const fn as_block(&self) -> Option<&BlockHitResult> {
        match self {
            Self::Block(hit) => Some(hit),
            _ => None,
        }
    }
}

/// The world and actor an event or action happens in.
pub struct InteractionContext<'a> {
    /// Registries and behaviors.
    pub host: &'a Host,
    /// The world.
    pub world: &'a mut dyn World,
    /// The acting player, `None` for dispensers and other machines.
    pub player: Option<&'a mut dyn Player>,
}

impl<'a> InteractionContext<'a> {
    /// Creates a context.
    pub fn new(
        host: &'a Host,
        world: &'a mut dyn World,
        player: Option<&'a mut dyn Player>,
    ) -> Self {
        Self {
            host,
            world,
            player,
        }
    }

    /// Borrows the host, the world and the player separately.
    pub fn split(&mut self) -> (&Host, &mut dyn World, Option<&mut dyn Player>) {
        let player: Option<&mut dyn Player> = match &mut self.player {
            Some(player) => Some(&mut **player),
            None => None,
        };
        (self.host, &mut *self.world, player)
    }
}

/// Context for using an item in the air or at whatever the player looks at.
pub struct UseItemContext<'a> {
    /// Registries and behaviors.
    pub host: &'a Host,
    /// The world.
    pub world: &'a mut dyn World,
    /// The player using the item.
    pub player: &'a mut dyn Player,
    /// The hand holding the item.
    pub hand: InteractionHand,
    /// The held stack. Behaviors replace or shrink it in place.
    pub item_stack: &'a mut ItemStack,
}

impl<'a> UseItemContext<'a> {
    /// Creates a context.
    pub fn new(
        host: &'a Host,
        world: &'a mut dyn World,
        player: &'a mut dyn Player,
        hand: InteractionHand,
        item_stack: &'a mut ItemStack,
    ) -> Self {
        Self {
            host,
            world,
            player,
            hand,
            item_stack,
        }
    }

    /// Reborrows the world and the player for posting an event.
    pub fn interaction(&mut self) -> InteractionContext<'_> {
        InteractionContext {
            host: self.host,
            world: &mut *self.world,
            player: Some(&mut *self.player),
        }
    }
}
