//! Item behaviors: what an item does when used, and how it is named.

pub mod context;
pub mod items;

use std::sync::Arc;

use rustc_hash::FxHashMap;
use steel_registry::item_stack::ItemStack;
use steel_utils::Identifier;

use crate::host::Host;
use context::{InteractionResult, UseItemContext};

/// Type-specific logic of an item.
pub trait ItemBehavior: Send + Sync {
    /// Called when a player uses the item, e.g. right-clicks with it.
    fn use_item(&self, context: &mut UseItemContext) -> InteractionResult {
        let _ = context;
        InteractionResult::Pass
    }

    /// The name shown for `stack` when it has no custom name.
    ///
    /// Defaults to the translated item name.
    fn display_name(&self, stack: &ItemStack, host: &Host) -> String {
        default_display_name(stack, host)
    }

    /// Whether crafting with `stack` leaves an item behind.
    fn has_container_item(&self, stack: &ItemStack) -> bool {
        let _ = stack;
        false
    }

    /// The item left behind after crafting with `stack`.
    fn container_item(&self, stack: &ItemStack) -> ItemStack {
        let _ = stack;
        ItemStack::empty()
    }
}

/// The translated name of a stack's item, without any item-specific logic.
#[must_use]
pub fn default_display_name(stack: &ItemStack, host: &Host) -> String {
    match host.registry().items.get(stack.item()) {
        Some(item) => host.translations().translate(&item.name_key()),
        None => stack.item().to_string(),
    }
}

/// Maps items to their behavior.
#[derive(Default)]
pub struct ItemBehaviorRegistry {
    behaviors: FxHashMap<Identifier, Arc<dyn ItemBehavior>>,
}

impl ItemBehaviorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the behavior of `item`, replacing any previous one.
    pub fn register(&mut self, item: Identifier, behavior: Arc<dyn ItemBehavior>) {
        if self.behaviors.insert(item.clone(), behavior).is_some() {
            log::warn!("Replaced the behavior of {item}");
        }
    }

    /// Returns the behavior of `item`.
    #[must_use]
    pub fn get(&self, item: &Identifier) -> Option<&Arc<dyn ItemBehavior>> {
        self.behaviors.get(item)
    }
}
