//! # Steel Registry
//!
//! Item, block and fluid definitions, plus the item and fluid stacks that
//! carry them around.

pub mod blocks;
pub mod fluid;
pub mod item_stack;
pub mod items;
pub mod nbt;

use thiserror::Error;

use crate::blocks::BlockRegistry;
use crate::fluid::FluidRegistry;
use crate::items::ItemRegistry;

/// Errors raised while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Registration happened after the registry was frozen.
    #[error("the {0} registry is frozen")]
    Frozen(&'static str),
    /// The key is already registered.
    #[error("{0} is already registered")]
    Duplicate(String),
}

/// Shared behaviour of the registries.
pub trait RegistryExt {
    /// Stops further registration.
    fn freeze(&mut self);
}

/// Every registry the fluid system needs.
pub struct Registry {
    /// Block definitions.
    pub blocks: BlockRegistry,
    /// Fluids and the set of bucket fluids.
    pub fluids: FluidRegistry,
    /// Item definitions.
    pub items: ItemRegistry,
}

impl Default for Registry {
    fn default() -> Self {
        Self::vanilla()
    }
}

impl Registry {
    /// Creates the registries with their vanilla content.
    #[must_use]
    pub fn vanilla() -> Self {
        Self {
            blocks: BlockRegistry::vanilla(),
            fluids: FluidRegistry::new(),
            items: ItemRegistry::vanilla(),
        }
    }
}

impl RegistryExt for Registry {
    fn freeze(&mut self) {
        self.blocks.freeze();
        self.fluids.freeze();
        self.items.freeze();
        log::info!(
            "Registries frozen: {} items, {} fluids",
            self.items.len(),
            self.fluids.len()
        );
    }
}
