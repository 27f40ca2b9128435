//! Vanilla empty bucket behavior.

use steel_registry::{
    blocks::{BlockState, vanilla as blocks},
    fluid::FluidId,
    item_stack::ItemStack,
    items::vanilla as items,
};
use steel_utils::UpdateFlags;

use crate::behavior::ItemBehavior;
use crate::behavior::context::{HitResult, InteractionResult, UseItemContext};
use crate::event::{EventResult, FillBucketEvent};
use crate::inventory::give_item_to_player;
use crate::player::Stat;
use crate::world::{ClipFluid, clip, get_start_and_end_pos};

/// Behavior for the empty vanilla bucket.
///
/// Posts a [`FillBucketEvent`] first, so listeners such as the universal
/// bucket can fill it with any fluid. If nobody handles the event, water and
/// lava source blocks are picked up the vanilla way.
#[derive(Debug, Default)]
pub struct EmptyBucketBehavior;

impl EmptyBucketBehavior {
    /// Creates a new empty bucket behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Replaces one empty bucket with `filled`. Creative players keep the
    /// empty bucket.
    fn fill_bucket(context: &mut UseItemContext, filled: ItemStack) {
        if context.player.has_infinite_materials() {
            return;
        }

        context.item_stack.shrink(1);
        if context.item_stack.is_empty() {
            *context.item_stack = filled;
        } else {
            let host = context.host;
            give_item_to_player(
                &host.registry().items,
                context.world,
                context.player,
                filled,
            );
        }
    }
}

impl ItemBehavior for EmptyBucketBehavior {
    fn use_item(&self, context: &mut UseItemContext) -> InteractionResult {
        let host = context.host;
        let registry = host.registry();
        let (start, end) = get_start_and_end_pos(&*context.player);
        let hit = clip(
            &*context.world,
            &registry.blocks,
            start,
            end,
            ClipFluid::SourceOnly,
        );

        let target = hit.map_or(HitResult::Miss, HitResult::Block);
        let mut event = FillBucketEvent::new(context.item_stack.clone(), Some(target));
        if host
            .fill_bucket_events()
            .post(&mut context.interaction(), &mut event)
        {
            return InteractionResult::Fail;
        }

        if event.result() == EventResult::Allow {
            let Some(filled) = event.filled_bucket().cloned() else {
                return InteractionResult::Fail;
            };
            context.player.award_stat(Stat::Used(items::BUCKET));
            Self::fill_bucket(context, filled);
            return InteractionResult::Success;
        }

        let Some(hit) = hit else {
            return InteractionResult::Pass;
        };
        if !context.world.may_interact(&*context.player, &hit.block_pos) {
            return InteractionResult::Fail;
        }
        if !context.player.may_use_item_at(
            &hit.direction.relative(&hit.block_pos),
            hit.direction,
            context.item_stack,
        ) {
            return InteractionResult::Fail;
        }

        let state = context.world.get_block_state(&hit.block_pos);
        log::debug!("Empty bucket hit block: {}", state.block);
        let (fluid, filled_bucket) = if state.is(&blocks::WATER) && state.is_source() {
            (FluidId::WATER, items::WATER_BUCKET)
        } else if state.is(&blocks::LAVA) && state.is_source() {
            (FluidId::LAVA, items::LAVA_BUCKET)
        } else {
            return InteractionResult::Fail;
        };

        if !context.world.set_block(
            hit.block_pos,
            BlockState::air(),
            UpdateFlags::UPDATE_ALL_IMMEDIATE,
        ) {
            return InteractionResult::Fail;
        }

        context.player.award_stat(Stat::Used(items::BUCKET));
        if let Some(fluid) = registry.fluids.get(fluid) {
            context.player.play_sound(&fluid.fill_sound, 1.0, 1.0);
        }
        Self::fill_bucket(context, ItemStack::new(filled_bucket));
        InteractionResult::Success
    }
}

#[cfg(test)]
mod tests {
    use steel_registry::Registry;
    use steel_utils::{BlockPos, InteractionHand};

    use super::*;
    use crate::config::FluidConfig;
    use crate::event::{Cancellable, EventPriority};
    use crate::host::Host;
    use crate::testing::{TestPlayer, TestWorld, oil, oil_block, test_host, test_host_with};
    use crate::world::World;

    const BELOW: BlockPos = BlockPos::new(0, 64, 0);

    fn use_bucket(
        host: &Host,
        world: &mut TestWorld,
        player: &mut TestPlayer,
        stack: &mut ItemStack,
    ) -> InteractionResult {
        let mut context = UseItemContext::new(host, world, player, InteractionHand::MainHand, stack);
        EmptyBucketBehavior::new().use_item(&mut context)
    }

    #[test]
    fn test_universal_listener_fills_from_water() {
        let host = test_host();
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(blocks::WATER));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(items::WATER_BUCKET));
        assert!(world.get_block_state(&BELOW).is(&blocks::AIR));
    }

    #[test]
    fn test_universal_listener_fills_from_oil() {
        let host = test_host();
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(oil_block()));

        let mut stack = ItemStack::with_count(items::BUCKET, 4);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::with_count(items::BUCKET, 3));
        let bucket = host.universal_bucket().expect("installed");
        let filled = player
            .inventory
            .iter()
            .find(|slot| slot.is(&bucket.key))
            .expect("filled bucket was handed out");
        assert_eq!(
            bucket.fluid(filled, &host.registry().fluids).map(|f| f.fluid),
            Some(oil(&host))
        );
    }

    #[test]
    fn test_small_universal_bucket_fills_from_oil() {
        let host = test_host_with(&FluidConfig {
            universal_bucket_capacity: 500,
            ..FluidConfig::default()
        });
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(oil_block()));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        let bucket = host.universal_bucket().expect("installed");
        assert_eq!(
            bucket.fluid(&stack, &host.registry().fluids).map(|f| f.amount),
            Some(500)
        );
        assert!(world.get_block_state(&BELOW).is(&blocks::AIR));
    }

    #[test]
    fn test_solid_target_is_cancelled() {
        let host = test_host();
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(blocks::STONE));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Fail);
        assert_eq!(stack, ItemStack::new(items::BUCKET));
    }

    #[test]
    fn test_nothing_in_reach_passes() {
        let host = test_host();
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);
        assert_eq!(result, InteractionResult::Pass);
    }

    #[test]
    fn test_vanilla_pickup_without_listeners() {
        let host = Host::new(Registry::vanilla());
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(blocks::LAVA));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(items::LAVA_BUCKET));
        assert!(world.get_block_state(&BELOW).is(&blocks::AIR));
        assert_eq!(player.stats, vec![Stat::Used(items::BUCKET)]);
    }

    #[test]
    fn test_creative_keeps_empty_bucket() {
        let host = Host::new(Registry::vanilla());
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        player.creative = true;
        world.put(BELOW, BlockState::new(blocks::WATER));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(items::BUCKET));
        assert!(world.get_block_state(&BELOW).is(&blocks::AIR));
    }

    #[test]
    fn test_earlier_listener_wins() {
        let mut host = test_host();
        host.fill_bucket_events_mut()
            .subscribe_fn(EventPriority::High, false, |_ctx, event: &mut FillBucketEvent| {
                event.set_result(EventResult::Allow);
                event.set_filled_bucket(ItemStack::new(items::MILK_BUCKET));
            });
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(blocks::WATER));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(items::MILK_BUCKET));
        // The universal bucket saw a decided event and left the water alone.
        assert!(world.get_block_state(&BELOW).is(&blocks::WATER));
    }

    #[test]
    fn test_cancelled_event_fails() {
        let mut host = Host::new(Registry::vanilla());
        host.fill_bucket_events_mut()
            .subscribe_fn(EventPriority::Normal, false, |_ctx, event: &mut FillBucketEvent| {
                event.set_cancelled(true);
            });
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(BELOW, BlockState::new(blocks::WATER));

        let mut stack = ItemStack::new(items::BUCKET);
        let result = use_bucket(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Fail);
        assert!(world.get_block_state(&BELOW).is(&blocks::WATER));
    }
}
