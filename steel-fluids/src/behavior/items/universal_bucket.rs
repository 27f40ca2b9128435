//! A bucket that can hold any bucket fluid.
//!
//! The bucket keeps no state of its own. What a stack holds lives in the
//! stack's NBT tag as a serialized [`FluidStack`], so a filled stack always
//! carries exactly one bucket's capacity and an untagged stack is empty.

use std::borrow::Cow;

use simdnbt::owned::NbtCompound;
use steel_registry::{
    Registry, RegistryError,
    fluid::{BUCKET_VOLUME, FluidId, FluidRegistry, FluidStack},
    item_stack::ItemStack,
    items::vanilla,
};
use steel_utils::Identifier;
use thiserror::Error;

use crate::behavior::context::{HitResult, InteractionContext, InteractionResult, UseItemContext};
use crate::behavior::{ItemBehavior, default_display_name};
use crate::capability::{FluidBucketWrapper, FluidContainerItem, FluidHandler};
use crate::config::ConfigError;
use crate::event::{Cancellable, EventHandler, EventResult, FillBucketEvent};
use crate::fluid::fluid_util;
use crate::host::Host;
use crate::inventory::give_item_to_player;
use crate::player::Stat;
use crate::world::{ClipFluid, clip, get_start_and_end_pos};

/// The registry name of milk. Milk has no block, so buckets special-case it.
pub const MILK: &str = "milk";

/// The key of the universal bucket installed by [`Host::install_universal_bucket`].
pub const UNIVERSAL_BUCKET: Identifier = Identifier::new_static("steel", "universal_bucket");

/// Errors raised while setting up a universal bucket.
#[derive(Error, Debug)]
pub enum BucketError {
    /// Buckets must hold something.
    #[error("bucket capacity must be positive, got {0}")]
    InvalidCapacity(i32),
    /// Registering the bucket failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Decides whether the empty container of a fill event belongs to a bucket.
///
/// Arguments are the event's empty stack, the bucket's empty template and
/// the bucket's NBT sensitivity.
pub type EmptyMatcher = fn(&ItemStack, &ItemStack, bool) -> bool;

/// Same item, and rejects the stack when the bucket is NBT sensitive and the
/// tags are equal.
///
/// This is the historical behavior. Its NBT condition is the opposite of
/// what the flag's name suggests; [`strict_empty_match`] is the literal
/// reading.
#[must_use]
pub fn legacy_empty_match(empty: &ItemStack, template: &ItemStack, nbt_sensitive: bool) -> bool {
    empty.is_item_equal(template) && !(nbt_sensitive && ItemStack::are_tags_equal(empty, template))
}

/// Same item, and the same tags when the bucket is NBT sensitive.
#[must_use]
pub fn strict_empty_match(empty: &ItemStack, template: &ItemStack, nbt_sensitive: bool) -> bool {
    empty.is_item_equal(template) && (!nbt_sensitive || ItemStack::are_tags_equal(empty, template))
}

/// A bucket that can carry any fluid registered as a bucket fluid.
pub struct UniversalBucket {
    /// The item key.
    pub key: Identifier,
    translation_key: Cow<'static, str>,
    capacity: i32,
    empty: Option<ItemStack>,
    nbt_sensitive: bool,
    empty_matcher: EmptyMatcher,
}

impl UniversalBucket {
    /// Creates a bucket.
    ///
    /// `empty` is the item handed back when the bucket is emptied and the
    /// item recognized when filling through the fill event. `nbt_sensitive`
    /// should be set when the empty and the full bucket are the same item.
    pub fn new(
        key: Identifier,
        translation_key: impl Into<Cow<'static, str>>,
        capacity: i32,
        empty: Option<ItemStack>,
        nbt_sensitive: bool,
    ) -> Result<Self, BucketError> {
        if capacity <= 0 {
            return Err(BucketError::InvalidCapacity(capacity));
        }
        Ok(Self {
            key,
            translation_key: translation_key.into(),
            capacity,
            empty,
            nbt_sensitive,
            empty_matcher: legacy_empty_match,
        })
    }

    /// Replaces the predicate used to recognize empty buckets in fill events.
    #[must_use]
    pub fn with_empty_matcher(mut self, matcher: EmptyMatcher) -> Self {
        self.empty_matcher = matcher;
        self
    }

    /// How much fluid a filled bucket holds.
    #[must_use]
    pub const fn capacity(&self) -> i32 {
        self.capacity
    }

    /// The empty template.
    #[must_use]
    pub fn empty(&self) -> Option<&ItemStack> {
        self.empty.as_ref()
    }

    /// Whether fill events compare the empty item's tag too.
    #[must_use]
    pub const fn is_nbt_sensitive(&self) -> bool {
        self.nbt_sensitive
    }

    /// Translation key without the `.name` suffix.
    #[must_use]
    pub fn translation_key(&self) -> &str {
        &self.translation_key
    }

    /// A fresh empty bucket: a copy of the template, or an untagged stack of
    /// this item when there is none.
    #[must_use]
    pub fn empty_instance(&self) -> ItemStack {
        self.empty
            .clone()
            .unwrap_or_else(|| ItemStack::new(self.key.clone()))
    }

    /// The fluid held by `stack`. Missing or malformed data reads as empty.
    #[must_use]
    pub fn fluid(&self, stack: &ItemStack, fluids: &FluidRegistry) -> Option<FluidStack> {
        FluidStack::load_from_nbt(stack.tag(), fluids)
    }

    /// A stack of this bucket filled with `fluid`.
    ///
    /// Bucket fluids get a full payload. Water and lava, unless registered as
    /// bucket fluids, produce the vanilla water and lava buckets. Anything
    /// else yields an untouched, empty stack.
    #[must_use]
    pub fn filled_bucket(&self, registry: &Registry, fluid: FluidId) -> ItemStack {
        let mut bucket = ItemStack::new(self.key.clone());

        if registry.fluids.is_bucket_fluid(fluid) {
            let mut tag = NbtCompound::new();
            FluidStack::new(fluid, self.capacity).write_to_nbt(&registry.fluids, &mut tag);
            bucket.set_tag(Some(tag));
        } else if fluid == FluidId::WATER {
            bucket.deserialize_nbt(&ItemStack::new(vanilla::WATER_BUCKET).serialize_nbt());
        } else if fluid == FluidId::LAVA {
            bucket.deserialize_nbt(&ItemStack::new(vanilla::LAVA_BUCKET).serialize_nbt());
        }

        bucket
    }

    /// One full stack per bucket fluid, for creative menus.
    ///
    /// Water, lava and milk are left out as they have their own vanilla
    /// buckets. Each candidate is filled through the fluid handler with one
    /// bucket of fluid and kept only if all of it was accepted. Accepted
    /// candidates carry the full capacity.
    pub fn sub_items<'a>(&'a self, registry: &'a Registry) -> impl Iterator<Item = ItemStack> + 'a {
        registry
            .fluids
            .iter()
            .filter(|(id, fluid)| {
                *id != FluidId::WATER && *id != FluidId::LAVA && fluid.name != MILK
            })
            .filter_map(move |(id, _)| {
                let resource = FluidStack::new(id, BUCKET_VOLUME);
                let mut stack = ItemStack::new(self.key.clone());
                let accepted = self.init_capabilities(&mut stack, registry).fill(&resource, true);
                (accepted == resource.amount).then_some(stack)
            })
    }

    /// The fluid handler of `stack`.
    pub fn init_capabilities<'a>(
        &'a self,
        stack: &'a mut ItemStack,
        registry: &'a Registry,
    ) -> FluidBucketWrapper<'a> {
        FluidBucketWrapper::new(stack, self, registry)
    }

    /// Fills the bucket from the world when a player uses a matching empty
    /// container.
    ///
    /// Leaves events alone that another listener already decided, that hold
    /// some other container, or that don't target a block. Otherwise the
    /// event is either allowed with the filled bucket attached, or cancelled
    /// so no other bucket logic fills the container instead.
    pub fn on_fill_bucket(&self, ctx: &mut InteractionContext<'_>, event: &mut FillBucketEvent) {
        if event.result() != EventResult::Default {
            return;
        }

        let Some(template) = &self.empty else {
            return;
        };
        let empty = event.empty_bucket();
        if empty.is_empty() || !(self.empty_matcher)(empty, template, self.nbt_sensitive) {
            return;
        }

        let Some(HitResult::Block(hit)) = event.target().copied() else {
            return;
        };

        let single = empty.copy_with_count(1);
        let (host, world, player) = ctx.split();
        match fluid_util::try_pick_up_fluid(
            host,
            world,
            player,
            &single,
            hit.block_pos,
            hit.direction,
        ) {
            Some(filled) => {
                event.set_result(EventResult::Allow);
                event.set_filled_bucket(filled);
            }
            None => event.set_cancelled(true),
        }
    }
}

impl ItemBehavior for UniversalBucket {
    fn use_item(&self, context: &mut UseItemContext) -> InteractionResult {
        let host = context.host;
        let registry = host.registry();
        // Empty buckets are filled through the fill event.
        let Some(fluid_stack) = self.fluid(context.item_stack, &registry.fluids) else {
            return InteractionResult::Pass;
        };

        let (start, end) = get_start_and_end_pos(&*context.player);
        let Some(hit) = clip(&*context.world, &registry.blocks, start, end, ClipFluid::None) else {
            return InteractionResult::Pass;
        };

        let clicked_pos = hit.block_pos;
        if !context.world.may_interact(&*context.player, &clicked_pos) {
            return InteractionResult::Fail;
        }

        let target_pos = hit.direction.relative(&clicked_pos);
        if !context
            .player
            .may_use_item_at(&target_pos, hit.direction, context.item_stack)
        {
            return InteractionResult::Fail;
        }

        let placed = fluid_util::try_place_fluid(
            host,
            &mut *context.world,
            Some(&*context.player),
            &fluid_stack,
            target_pos,
        );
        // Creative players keep the full bucket, which reads as a failed use.
        if !placed || context.player.has_infinite_materials() {
            return InteractionResult::Fail;
        }

        context.player.award_stat(Stat::Used(self.key.clone()));
        context.item_stack.shrink(1);
        let empty = self.empty_instance();
        if context.item_stack.is_empty() {
            *context.item_stack = empty;
        } else {
            give_item_to_player(&registry.items, context.world, context.player, empty);
        }
        InteractionResult::Success
    }

    fn display_name(&self, stack: &ItemStack, host: &Host) -> String {
        let translations = host.translations();
        let fluids = &host.registry().fluids;

        let Some(fluid) = self
            .fluid(stack, fluids)
            .and_then(|fluid_stack| fluids.get(fluid_stack.fluid))
        else {
            return match &self.empty {
                Some(template) if !template.is(&self.key) => host.display_name(template),
                _ => default_display_name(stack, host),
            };
        };

        let specific = format!("{}.{}", self.translation_key, fluid.name);
        if translations.can_translate(&specific) {
            return translations.translate(&specific);
        }

        let fluid_name = translations.translate(&fluid.translation_key());
        translations.translate_formatted(&format!("{}.name", self.translation_key), &[&fluid_name])
    }

    fn has_container_item(&self, _stack: &ItemStack) -> bool {
        self.empty.is_some()
    }

    fn container_item(&self, _stack: &ItemStack) -> ItemStack {
        self.empty.clone().unwrap_or_else(ItemStack::empty)
    }
}

impl FluidContainerItem for UniversalBucket {
    fn fluid_handler<'a>(
        &'a self,
        stack: &'a mut ItemStack,
        registry: &'a Registry,
    ) -> Box<dyn FluidHandler + 'a> {
        Box::new(self.init_capabilities(stack, registry))
    }
}

impl EventHandler<FillBucketEvent> for UniversalBucket {
    fn handle(&self, ctx: &mut InteractionContext<'_>, event: &mut FillBucketEvent) {
        self.on_fill_bucket(ctx, event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use simdnbt::owned::NbtTag;
    use steel_registry::{
        blocks::{BlockState, vanilla as blocks},
        fluid::{BUCKET_VOLUME, Fluid},
    };
    use steel_utils::{BlockPos, Direction, InteractionHand, math::Vector3};

    use super::*;
    use crate::behavior::context::BlockHitResult;
    use crate::config::FluidConfig;
    use crate::event::Event;
    use crate::testing::{TestPlayer, TestWorld, oil, oil_block, test_host, test_host_with};
    use crate::world::World;

    fn host_with_capacity(capacity: i32) -> Host {
        test_host_with(&FluidConfig {
            universal_bucket_capacity: capacity,
            ..FluidConfig::default()
        })
    }

    const GROUND: BlockPos = BlockPos::new(0, 64, 0);
    const ABOVE: BlockPos = BlockPos::new(0, 65, 0);

    fn use_stack(
        host: &Host,
        world: &mut TestWorld,
        player: &mut TestPlayer,
        stack: &mut ItemStack,
    ) -> InteractionResult {
        let bucket = host.universal_bucket().expect("installed").clone();
        let mut context = UseItemContext::new(host, world, player, InteractionHand::MainHand, stack);
        bucket.use_item(&mut context)
    }

    fn block_hit(pos: BlockPos) -> HitResult {
        HitResult::Block(BlockHitResult {
            block_pos: pos,
            direction: Direction::Up,
            location: Vector3::new(0.5, 65.0, 0.5),
        })
    }

    fn fire_event(host: &Host, world: &mut TestWorld, event: &mut FillBucketEvent) {
        let bucket = host.universal_bucket().expect("installed");
        let mut player = TestPlayer::new();
        let mut ctx = InteractionContext::new(host, world, Some(&mut player));
        bucket.on_fill_bucket(&mut ctx, event);
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(matches!(
            UniversalBucket::new(UNIVERSAL_BUCKET, "item.bucket", 0, None, false),
            Err(BucketError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_filled_bucket_holds_full_capacity() {
        let mut host = test_host();
        let honey = host
            .registry_mut()
            .fluids
            .register(Fluid::new("honey"))
            .expect("honey");
        host.registry_mut()
            .fluids
            .add_bucket_for_fluid(honey)
            .expect("bucket fluid");

        let bucket = host.universal_bucket().expect("installed");
        for fluid in host.registry().fluids.bucket_fluids() {
            let filled = bucket.filled_bucket(host.registry(), fluid);
            assert!(filled.is(&bucket.key));
            assert_eq!(
                bucket.fluid(&filled, &host.registry().fluids),
                Some(FluidStack::new(fluid, bucket.capacity()))
            );
        }
    }

    #[test]
    fn test_water_and_lava_are_vanilla_buckets() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");

        assert_eq!(
            bucket.filled_bucket(host.registry(), FluidId::WATER),
            ItemStack::new(vanilla::WATER_BUCKET)
        );
        assert_eq!(
            bucket.filled_bucket(host.registry(), FluidId::LAVA),
            ItemStack::new(vanilla::LAVA_BUCKET)
        );
    }

    #[test]
    fn test_unknown_fluid_gives_empty_bucket() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let milk = host.registry().fluids.get_by_name(MILK).expect("milk");

        let stack = bucket.filled_bucket(host.registry(), milk);
        assert_eq!(stack, ItemStack::new(UNIVERSAL_BUCKET));
        assert_eq!(bucket.fluid(&stack, &host.registry().fluids), None);
    }

    #[test]
    fn test_payload_survives_serialization() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let filled = bucket.filled_bucket(host.registry(), oil(&host));

        let restored = ItemStack::from_nbt(&filled.serialize_nbt()).expect("valid stack");
        assert_eq!(restored, filled);
        assert_eq!(
            bucket.fluid(&restored, &host.registry().fluids),
            Some(FluidStack::new(oil(&host), BUCKET_VOLUME))
        );
    }

    #[test]
    fn test_malformed_payload_reads_as_empty() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");

        let mut stack = ItemStack::new(UNIVERSAL_BUCKET);
        stack.tag_mut().insert("FluidName", NbtTag::Int(3));
        stack.tag_mut().insert("Amount", NbtTag::Int(BUCKET_VOLUME));
        assert_eq!(bucket.fluid(&stack, &host.registry().fluids), None);

        let mut stack = ItemStack::new(UNIVERSAL_BUCKET);
        stack.tag_mut().insert("FluidName", NbtTag::String("tar".into()));
        stack.tag_mut().insert("Amount", NbtTag::Int(BUCKET_VOLUME));
        assert_eq!(bucket.fluid(&stack, &host.registry().fluids), None);
    }

    #[test]
    fn test_sub_items_skip_vanilla_fluids() {
        let mut host = test_host();
        let milk = host.registry().fluids.get_by_name(MILK).expect("milk");
        let fluids = &mut host.registry_mut().fluids;
        fluids.add_bucket_for_fluid(FluidId::WATER).expect("water");
        fluids.add_bucket_for_fluid(FluidId::LAVA).expect("lava");
        fluids.add_bucket_for_fluid(milk).expect("milk");
        fluids.register(Fluid::new("tar")).expect("tar");

        let bucket = host.universal_bucket().expect("installed");
        let variants: Vec<_> = bucket
            .sub_items(host.registry())
            .map(|stack| bucket.fluid(&stack, &host.registry().fluids).map(|f| f.fluid))
            .collect();
        assert_eq!(variants, vec![Some(oil(&host))]);
    }

    #[test]
    fn test_empty_bucket_use_passes() {
        let host = test_host();
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::WATER));

        let mut stack = ItemStack::new(UNIVERSAL_BUCKET);
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Pass);
        assert_eq!(stack, ItemStack::new(UNIVERSAL_BUCKET));
        assert!(world.get_block_state(&GROUND).is(&blocks::WATER));
    }

    #[test]
    fn test_place_on_protected_block_fails() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::STONE));
        world.protected.insert(GROUND);

        let filled = bucket.filled_bucket(host.registry(), oil(&host));
        let mut stack = filled.clone();
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Fail);
        assert_eq!(stack, filled);
        assert!(world.get_block_state(&ABOVE).is(&blocks::AIR));
    }

    #[test]
    fn test_place_where_player_may_not_fails() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::STONE));
        player.denied.insert(ABOVE);

        let filled = bucket.filled_bucket(host.registry(), oil(&host));
        let mut stack = filled.clone();
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Fail);
        assert_eq!(stack, filled);
    }

    #[test]
    fn test_place_single_returns_empty_template() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::STONE));

        let mut stack = bucket.filled_bucket(host.registry(), oil(&host));
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(vanilla::BUCKET));
        assert_eq!(world.get_block_state(&ABOVE), BlockState::new(oil_block()));
        assert_eq!(player.stats, vec![Stat::Used(UNIVERSAL_BUCKET)]);
    }

    #[test]
    fn test_place_from_stack_hands_out_empty() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::STONE));

        let filled = bucket.filled_bucket(host.registry(), oil(&host));
        let mut stack = filled.copy_with_count(2);
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, filled);
        assert!(player.inventory.iter().any(|slot| slot.is(&vanilla::BUCKET)));
    }

    #[test]
    fn test_creative_placement_keeps_bucket() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        player.creative = true;
        world.put(GROUND, BlockState::new(blocks::STONE));

        let filled = bucket.filled_bucket(host.registry(), oil(&host));
        let mut stack = filled.clone();
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Fail);
        assert_eq!(stack, filled);
        assert_eq!(world.get_block_state(&ABOVE), BlockState::new(oil_block()));
    }

    #[test]
    fn test_fill_event_ignores_non_block_targets() {
        let host = test_host();
        let mut world = TestWorld::new();

        for target in [None, Some(HitResult::Miss), Some(HitResult::Entity(uuid::Uuid::nil()))] {
            let mut event = FillBucketEvent::new(ItemStack::new(vanilla::BUCKET), target);
            fire_event(&host, &mut world, &mut event);
            assert_eq!(event.result(), EventResult::Default);
            assert!(!event.cancelled());
            assert!(event.filled_bucket().is_none());
        }
    }

    #[test]
    fn test_fill_event_ignores_other_containers() {
        let host = test_host();
        let mut world = TestWorld::new();
        world.put(GROUND, BlockState::new(oil_block()));

        let mut event =
            FillBucketEvent::new(ItemStack::new(blocks::STONE), Some(block_hit(GROUND)));
        fire_event(&host, &mut world, &mut event);
        assert_eq!(event.result(), EventResult::Default);
        assert!(!event.cancelled());

        let mut event = FillBucketEvent::new(ItemStack::empty(), Some(block_hit(GROUND)));
        fire_event(&host, &mut world, &mut event);
        assert!(!event.cancelled());
    }

    #[test]
    fn test_fill_event_respects_earlier_decision() {
        let host = test_host();
        let mut world = TestWorld::new();
        world.put(GROUND, BlockState::new(oil_block()));

        let mut event = FillBucketEvent::new(ItemStack::new(vanilla::BUCKET), Some(block_hit(GROUND)));
        event.set_result(EventResult::Deny);
        fire_event(&host, &mut world, &mut event);

        assert_eq!(event.result(), EventResult::Deny);
        assert!(world.get_block_state(&GROUND).is(&oil_block()));
    }

    #[test]
    fn test_fill_event_fills_from_source() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let mut world = TestWorld::new();
        world.put(GROUND, BlockState::new(oil_block()));

        let mut event = FillBucketEvent::new(
            ItemStack::with_count(vanilla::BUCKET, 5),
            Some(block_hit(GROUND)),
        );
        fire_event(&host, &mut world, &mut event);

        assert_eq!(event.result(), EventResult::Allow);
        let filled = event.filled_bucket().expect("filled");
        assert_eq!(filled.count(), 1);
        assert_eq!(
            bucket.fluid(filled, &host.registry().fluids),
            Some(FluidStack::new(oil(&host), bucket.capacity()))
        );
        assert!(world.get_block_state(&GROUND).is(&blocks::AIR));
    }

    #[test]
    fn test_fill_event_fills_any_capacity() {
        for capacity in [500, 2000] {
            let host = host_with_capacity(capacity);
            let bucket = host.universal_bucket().expect("installed");
            let mut world = TestWorld::new();
            world.put(GROUND, BlockState::new(oil_block()));

            let mut event =
                FillBucketEvent::new(ItemStack::new(vanilla::BUCKET), Some(block_hit(GROUND)));
            fire_event(&host, &mut world, &mut event);

            assert_eq!(event.result(), EventResult::Allow, "capacity {capacity}");
            assert!(!event.cancelled());
            let filled = event.filled_bucket().expect("filled");
            assert_eq!(
                bucket.fluid(filled, &host.registry().fluids),
                Some(FluidStack::new(oil(&host), capacity))
            );
            assert!(world.get_block_state(&GROUND).is(&blocks::AIR));
        }
    }

    #[test]
    fn test_place_and_sub_items_with_large_capacity() {
        let host = host_with_capacity(2000);
        let bucket = host.universal_bucket().expect("installed");
        let variants: Vec<_> = bucket.sub_items(host.registry()).collect();
        assert_eq!(variants, vec![bucket.filled_bucket(host.registry(), oil(&host))]);

        let mut world = TestWorld::new();
        let mut player = TestPlayer::new();
        world.put(GROUND, BlockState::new(blocks::STONE));
        let mut stack = variants[0].clone();
        let result = use_stack(&host, &mut world, &mut player, &mut stack);

        assert_eq!(result, InteractionResult::Success);
        assert_eq!(stack, ItemStack::new(vanilla::BUCKET));
        assert_eq!(world.get_block_state(&ABOVE), BlockState::new(oil_block()));
    }

    #[test]
    fn test_fill_event_cancels_without_fluid() {
        let host = test_host();
        let mut world = TestWorld::new();
        world.put(GROUND, BlockState::new(blocks::STONE));

        let mut event = FillBucketEvent::new(ItemStack::new(vanilla::BUCKET), Some(block_hit(GROUND)));
        fire_event(&host, &mut world, &mut event);

        assert!(event.cancelled());
        assert_eq!(event.result(), EventResult::Default);
    }

    #[test]
    fn test_empty_matchers() {
        let template = ItemStack::new(vanilla::BUCKET);
        let mut tagged = ItemStack::new(vanilla::BUCKET);
        tagged.set_custom_name("Pail");

        assert!(legacy_empty_match(&template, &template, false));
        assert!(legacy_empty_match(&tagged, &template, false));
        // Sensitive legacy matching turns away identical tags.
        assert!(!legacy_empty_match(&template, &template, true));
        assert!(legacy_empty_match(&tagged, &template, true));

        assert!(strict_empty_match(&template, &template, true));
        assert!(!strict_empty_match(&tagged, &template, true));
        assert!(strict_empty_match(&tagged, &template, false));

        let stone = ItemStack::new(blocks::STONE);
        assert!(!legacy_empty_match(&stone, &template, false));
        assert!(!strict_empty_match(&stone, &template, false));
    }

    #[test]
    fn test_display_names() {
        let mut host = test_host();
        let bucket = Arc::clone(host.universal_bucket().expect("installed"));

        let empty = ItemStack::new(UNIVERSAL_BUCKET);
        assert_eq!(host.display_name(&empty), "Bucket");

        let filled = bucket.filled_bucket(host.registry(), oil(&host));
        assert_eq!(host.display_name(&filled), "Oil Bucket");

        host.translations_mut()
            .insert("item.steel.universal_bucket.oil", "Crude Oil Bucket");
        assert_eq!(host.display_name(&filled), "Crude Oil Bucket");

        let mut named = filled.clone();
        named.set_custom_name("Slick");
        assert_eq!(host.display_name(&named), "Slick");
    }

    #[test]
    fn test_display_name_without_template() {
        let host = test_host();
        let bucket = UniversalBucket::new(
            UNIVERSAL_BUCKET,
            "item.steel.universal_bucket",
            BUCKET_VOLUME,
            Some(ItemStack::new(UNIVERSAL_BUCKET)),
            true,
        )
        .expect("bucket");

        // A template of the same item falls back to the plain item name.
        assert_eq!(
            bucket.display_name(&ItemStack::new(UNIVERSAL_BUCKET), &host),
            "%s Bucket"
        );
    }

    #[test]
    fn test_container_item() {
        let host = test_host();
        let bucket = host.universal_bucket().expect("installed");
        let filled = bucket.filled_bucket(host.registry(), oil(&host));

        assert!(bucket.has_container_item(&filled));
        assert_eq!(bucket.container_item(&filled), ItemStack::new(vanilla::BUCKET));

        let bare = UniversalBucket::new(UNIVERSAL_BUCKET, "item.bucket", BUCKET_VOLUME, None, false)
            .expect("bucket");
        assert!(!bare.has_container_item(&filled));
        assert!(bare.container_item(&filled).is_empty());
        assert_eq!(bare.empty_instance(), ItemStack::new(UNIVERSAL_BUCKET));
    }
}
