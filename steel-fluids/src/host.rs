//! The registries and behaviors a server hands to the fluid system.

use std::sync::Arc;

use steel_registry::{
    Registry, RegistryExt,
    fluid::vanilla as fluids,
    item_stack::ItemStack,
    items::{Item, vanilla as items},
};
use steel_utils::{BlockPos, Direction, InteractionHand, text::Translations};

use crate::behavior::context::{InteractionResult, UseItemContext};
use crate::behavior::items::bucket::EmptyBucketBehavior;
use crate::behavior::items::universal_bucket::{
    BucketError, MILK, UNIVERSAL_BUCKET, UniversalBucket, legacy_empty_match, strict_empty_match,
};
use crate::behavior::{ItemBehaviorRegistry, default_display_name};
use crate::capability::{CapabilityRegistry, FluidHandler};
use crate::config::FluidConfig;
use crate::dispenser::{DispenseContext, DispenseFluidContainer, DispenserRegistry};
use crate::event::{EventBus, EventPriority, FillBucketEvent};
use crate::inventory::{Container, give_item_to_player};
use crate::player::Player;
use crate::world::World;

/// Everything item behaviors look up while running: registries,
/// translations, behaviors, capabilities and event listeners.
///
/// Built and configured during bootstrap, then shared immutably.
pub struct Host {
    registry: Registry,
    translations: Translations,
    item_behaviors: ItemBehaviorRegistry,
    capabilities: CapabilityRegistry,
    dispensers: DispenserRegistry,
    fill_bucket_events: EventBus<FillBucketEvent>,
    universal_bucket: Option<Arc<UniversalBucket>>,
}

impl Host {
    /// Creates a host around `registry` with the bundled translations and no
    /// behaviors.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            translations: Translations::vanilla(),
            item_behaviors: ItemBehaviorRegistry::new(),
            capabilities: CapabilityRegistry::new(),
            dispensers: DispenserRegistry::new(),
            fill_bucket_events: EventBus::new(),
            universal_bucket: None,
        }
    }

    /// Items, blocks and fluids.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access for registering content during bootstrap.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Display name translations.
    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Mutable access for adding translations during bootstrap.
    pub fn translations_mut(&mut self) -> &mut Translations {
        &mut self.translations
    }

    /// Item behaviors by item key.
    #[must_use]
    pub fn item_behaviors(&self) -> &ItemBehaviorRegistry {
        &self.item_behaviors
    }

    /// Mutable access for registering item behaviors.
    pub fn item_behaviors_mut(&mut self) -> &mut ItemBehaviorRegistry {
        &mut self.item_behaviors
    }

    /// Fluid capability providers by item key.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    /// Mutable access for registering fluid capabilities.
    pub fn capabilities_mut(&mut self) -> &mut CapabilityRegistry {
        &mut self.capabilities
    }

    /// Dispense behaviors by item key.
    #[must_use]
    pub fn dispensers(&self) -> &DispenserRegistry {
        &self.dispensers
    }

    /// Mutable access for registering dispense behaviors.
    pub fn dispensers_mut(&mut self) -> &mut DispenserRegistry {
        &mut self.dispensers
    }

    /// Listeners for empty containers being filled from the world.
    #[must_use]
    pub fn fill_bucket_events(&self) -> &EventBus<FillBucketEvent> {
        &self.fill_bucket_events
    }

    /// Mutable access for subscribing fill bucket listeners.
    pub fn fill_bucket_events_mut(&mut self) -> &mut EventBus<FillBucketEvent> {
        &mut self.fill_bucket_events
    }

    /// The universal bucket, once registered.
    #[must_use]
    pub fn universal_bucket(&self) -> Option<&Arc<UniversalBucket>> {
        self.universal_bucket.as_ref()
    }

    /// Registers `bucket` as an item with its behavior, fluid capability,
    /// fill event listener and dispenser behavior.
    pub fn register_universal_bucket(
        &mut self,
        bucket: UniversalBucket,
    ) -> Result<Arc<UniversalBucket>, BucketError> {
        self.registry.items.register(
            Item::new(bucket.key.clone(), bucket.translation_key().to_owned())
                .with_max_stack_size(1),
        )?;

        let bucket = Arc::new(bucket);
        let key = bucket.key.clone();
        self.item_behaviors.register(key.clone(), bucket.clone());
        self.capabilities.register(key.clone(), bucket.clone());
        self.fill_bucket_events
            .subscribe(bucket.clone(), EventPriority::Low, false);
        self.dispensers
            .register(key.clone(), Arc::new(DispenseFluidContainer));

        if let Some(previous) = self.universal_bucket.replace(bucket.clone()) {
            log::warn!("{key} replaces {} as the universal bucket", previous.key);
        }
        log::info!(
            "Registered universal bucket {key} holding {} mB",
            bucket.capacity()
        );
        Ok(bucket)
    }

    /// Installs the default universal bucket, `steel:universal_bucket`, and
    /// hooks it up to the vanilla buckets.
    ///
    /// The vanilla empty bucket is its empty template, so filling and
    /// emptying cycles between the two. The vanilla buckets get the fluid
    /// capability and the fluid dispenser behavior as well.
    pub fn install_universal_bucket(
        &mut self,
        config: &FluidConfig,
    ) -> Result<Arc<UniversalBucket>, BucketError> {
        config.validate()?;

        if config.enable_milk && self.registry.fluids.get_by_name(MILK).is_none() {
            self.registry.fluids.register(fluids::milk())?;
        }

        let matcher = if config.strict_nbt_matching {
            strict_empty_match
        } else {
            legacy_empty_match
        };
        let bucket = UniversalBucket::new(
            UNIVERSAL_BUCKET,
            "item.steel.universal_bucket",
            config.universal_bucket_capacity,
            Some(ItemStack::new(items::BUCKET)),
            config.nbt_sensitive,
        )?
        .with_empty_matcher(matcher);
        let bucket = self.register_universal_bucket(bucket)?;

        for item in [
            items::BUCKET,
            items::WATER_BUCKET,
            items::LAVA_BUCKET,
            items::MILK_BUCKET,
        ] {
            self.capabilities.register(item.clone(), bucket.clone());
            self.dispensers
                .register(item, Arc::new(DispenseFluidContainer));
        }
        self.item_behaviors
            .register(items::BUCKET, Arc::new(EmptyBucketBehavior::new()));

        Ok(bucket)
    }

    /// Ends bootstrap: no more items, blocks or fluids can be registered.
    pub fn freeze(&mut self) {
        self.registry.freeze();
    }

    /// The name shown for `stack`: its custom name, else what its behavior
    /// says, else the translated item name.
    #[must_use]
    pub fn display_name(&self, stack: &ItemStack) -> String {
        if let Some(name) = stack.custom_name() {
            return name;
        }
        match self.item_behaviors.get(stack.item()) {
            Some(behavior) => behavior.display_name(stack, self),
            None => default_display_name(stack, self),
        }
    }

    /// A fluid handler over `stack`, if its item has the capability.
    pub fn fluid_handler<'a>(
        &'a self,
        stack: &'a mut ItemStack,
    ) -> Option<Box<dyn FluidHandler + 'a>> {
        let provider = self.capabilities.get(stack.item())?;
        Some(provider.fluid_handler(stack, &self.registry))
    }

    /// Runs the behavior of the item in the player's `hand`.
    pub fn use_item(
        &self,
        world: &mut dyn World,
        player: &mut dyn Player,
        hand: InteractionHand,
    ) -> InteractionResult {
        let original = player.inventory_mut().item_in_hand(hand).clone();
        if original.is_empty() {
            return InteractionResult::Pass;
        }
        let Some(behavior) = self.item_behaviors.get(original.item()).cloned() else {
            return InteractionResult::Pass;
        };

        let mut stack = original.clone();
        let result = behavior.use_item(&mut UseItemContext::new(
            self, world, player, hand, &mut stack,
        ));

        // Items handed out during the use may have been merged into the hand slot.
        let slot = player.inventory_mut().item_in_hand_mut(hand);
        let merged = if ItemStack::is_same_item_same_tags(slot, &original) {
            slot.count() - original.count()
        } else {
            0
        };
        let displaced = slot.copy_with_count(merged);
        *slot = stack;
        if merged > 0 {
            give_item_to_player(&self.registry.items, world, player, displaced);
        }
        result
    }

    /// Fires the item in `slot` of a dispenser at `pos`. Returns `false` if
    /// the slot is empty.
    pub fn dispense(
        &self,
        world: &mut dyn World,
        pos: BlockPos,
        facing: Direction,
        inventory: &mut dyn Container,
        slot: usize,
    ) -> bool {
        let stack = inventory.get_item(slot).clone();
        if stack.is_empty() {
            return false;
        }

        let behavior = self.dispensers.behavior(stack.item());
        let mut ctx = DispenseContext::new(self, world, pos, facing, inventory);
        let remaining = behavior.dispense(&mut ctx, stack);
        ctx.inventory.set_item(slot, remaining);
        true
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(Registry::vanilla())
    }
}
