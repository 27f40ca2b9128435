use rustc_hash::FxHashMap;
use steel_utils::Identifier;

use super::{DEFAULT_MAX_STACK_SIZE, Item, vanilla};
use crate::{RegistryError, RegistryExt};

/// All known items, keyed by identifier.
pub struct ItemRegistry {
    items: FxHashMap<Identifier, Item>,
    allows_registering: bool,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Creates a registry holding the vanilla items.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut registry = Self::new();
        for item in vanilla::items() {
            registry.items.insert(item.key.clone(), item);
        }
        registry
    }

    /// Registers an item.
    pub fn register(&mut self, item: Item) -> Result<(), RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen("item"));
        }
        if self.items.contains_key(&item.key) {
            return Err(RegistryError::Duplicate(item.key.to_string()));
        }
        log::debug!("Registered item {}", item.key);
        self.items.insert(item.key.clone(), item);
        Ok(())
    }

    /// Looks up an item by key.
    #[must_use]
    pub fn get(&self, key: &Identifier) -> Option<&Item> {
        self.items.get(key)
    }

    /// Returns the max stack size of an item, 64 for unknown items.
    #[must_use]
    pub fn max_stack_size(&self, key: &Identifier) -> i32 {
        self.get(key)
            .map_or(DEFAULT_MAX_STACK_SIZE, |item| item.max_stack_size)
    }

    /// The number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RegistryExt for ItemRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
