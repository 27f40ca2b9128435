use rustc_hash::FxHashMap;
use steel_utils::Identifier;

use super::{Block, BlockConfig, vanilla};
use crate::{RegistryError, RegistryExt};

/// All known blocks, keyed by identifier.
pub struct BlockRegistry {
    blocks: FxHashMap<Identifier, Block>,
    allows_registering: bool,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Creates a registry holding the vanilla blocks.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut registry = Self::new();
        for block in vanilla::blocks() {
            registry.blocks.insert(block.key.clone(), block);
        }
        registry
    }

    /// Registers a block.
    pub fn register(&mut self, block: Block) -> Result<(), RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen("block"));
        }
        if self.blocks.contains_key(&block.key) {
            return Err(RegistryError::Duplicate(block.key.to_string()));
        }
        log::debug!("Registered block {}", block.key);
        self.blocks.insert(block.key.clone(), block);
        Ok(())
    }

    /// Looks up a block by key.
    #[must_use]
    pub fn get(&self, key: &Identifier) -> Option<&Block> {
        self.blocks.get(key)
    }

    /// Returns the properties of a block.
    ///
    /// Unknown blocks behave as solid.
    #[must_use]
    pub fn config(&self, key: &Identifier) -> BlockConfig {
        self.get(key).map_or(BlockConfig::SOLID, |block| block.config)
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
