//! The fluid handler capability: a tank-like view over item stacks and blocks.

mod block_wrapper;
mod bucket_wrapper;

pub use block_wrapper::FluidBlockWrapper;
pub use bucket_wrapper::FluidBucketWrapper;

use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::{Registry, fluid::FluidStack, item_stack::ItemStack};
use steel_utils::Identifier;

/// A snapshot of one tank of a [`FluidHandler`].
#[derive(Debug, Clone, PartialEq)]
pub struct FluidTankProperties {
    /// What the tank holds.
    pub contents: Option<FluidStack>,
    /// How much the tank holds at most.
    pub capacity: i32,
    /// Whether the tank accepts fluid.
    pub can_fill: bool,
    /// Whether fluid can be taken out.
    pub can_drain: bool,
}

impl FluidTankProperties {
    /// A tank that can be filled and drained.
    #[must_use]
    pub const fn new(contents: Option<FluidStack>, capacity: i32) -> Self {
        Self {
            contents,
            capacity,
            can_fill: true,
            can_drain: true,
        }
    }
}

/// Something that stores fluid and lets others fill or drain it.
///
/// `do_fill` and `do_drain` set to `false` simulate the transfer without
/// changing anything.
pub trait FluidHandler {
    /// Describes the tanks of this handler.
    fn tank_properties(&self) -> Vec<FluidTankProperties>;

    /// Offers `resource` and returns how much was (or would be) accepted.
    fn fill(&mut self, resource: &FluidStack, do_fill: bool) -> i32;

    /// Drains fluid matching `resource`, up to its amount.
    fn drain(&mut self, resource: &FluidStack, do_drain: bool) -> Option<FluidStack>;

    /// Drains up to `max_drain` of whatever is stored.
    fn drain_amount(&mut self, max_drain: i32, do_drain: bool) -> Option<FluidStack>;
}

/// An item that exposes a [`FluidHandler`] for its stacks.
pub trait FluidContainerItem: Send + Sync {
    /// Wraps `stack` in a fluid handler. Changes made through the handler are
    /// written back to the stack.
    fn fluid_handler<'a>(
        &'a self,
        stack: &'a mut ItemStack,
        registry: &'a Registry,
    ) -> Box<dyn FluidHandler + 'a>;
}

/// Maps items to their fluid capability provider.
#[derive(Default)]
pub struct CapabilityRegistry {
    providers: FxHashMap<Identifier, Arc<dyn FluidContainerItem>>,
}

impl CapabilityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a provider to `item`, replacing any previous one.
    pub fn register(&mut self, item: Identifier, provider: Arc<dyn FluidContainerItem>) {
        if self.providers.insert(item.clone(), provider).is_some() {
            log::warn!("Replaced the fluid capability of {item}");
        }
    }

    /// Returns the provider for `item`.
    #[must_use]
    pub fn get(&self, item: &Identifier) -> Option<&Arc<dyn FluidContainerItem>> {
        self.providers.get(item)
    }

    /// Returns whether `item` has a fluid capability.
    #[must_use]
    pub fn has(&self, item: &Identifier) -> bool {
        self.providers.contains_key(item)
    }
}
