//! The fluid registry.

use std::borrow::Cow;

use rustc_hash::{FxHashMap, FxHashSet};
use steel_utils::Identifier;

use super::{Fluid, FluidId, vanilla};
use crate::{RegistryError, RegistryExt};

/// All known fluids, plus the set of fluids the universal bucket may hold.
pub struct FluidRegistry {
    fluids: Vec<Fluid>,
    by_name: FxHashMap<Cow<'static, str>, FluidId>,
    by_block: FxHashMap<Identifier, FluidId>,
    bucket_fluids: FxHashSet<FluidId>,
    allows_registering: bool,
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidRegistry {
    /// Creates a registry holding water and lava.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            fluids: Vec::new(),
            by_name: FxHashMap::default(),
            by_block: FxHashMap::default(),
            bucket_fluids: FxHashSet::default(),
            allows_registering: true,
        };
        // Water and lava always occupy ids 0 and 1.
        registry.insert(vanilla::water());
        registry.insert(vanilla::lava());
        registry
    }

    fn insert(&mut self, fluid: Fluid) -> FluidId {
        let id = FluidId(self.fluids.len() as u16);
        self.by_name.insert(fluid.name.clone(), id);
        if let Some(block) = &fluid.block {
            self.by_block.insert(block.clone(), id);
        }
        self.fluids.push(fluid);
        id
    }

    /// Registers a fluid and returns its id.
    pub fn register(&mut self, fluid: Fluid) -> Result<FluidId, RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen("fluid"));
        }
        if self.by_name.contains_key(&fluid.name) {
            return Err(RegistryError::Duplicate(fluid.name.to_string()));
        }
        log::debug!("Registered fluid {}", fluid.name);
        Ok(self.insert(fluid))
    }

    /// Marks a registered fluid as fillable by the universal bucket.
    ///
    /// Returns `false` if the fluid is unknown.
    pub fn add_bucket_for_fluid(&mut self, id: FluidId) -> Result<bool, RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen("fluid"));
        }
        if self.get(id).is_none() {
            return Ok(false);
        }
        self.bucket_fluids.insert(id);
        Ok(true)
    }

    /// Returns whether the universal bucket may hold this fluid.
    #[must_use]
    pub fn is_bucket_fluid(&self, id: FluidId) -> bool {
        self.bucket_fluids.contains(&id)
    }

    /// Iterates the bucket-fillable fluids in id order.
    pub fn bucket_fluids(&self) -> impl Iterator<Item = FluidId> + '_ {
        self.iter()
            .map(|(id, _)| id)
            .filter(|id| self.bucket_fluids.contains(id))
    }

    /// Looks up a fluid by id.
    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&Fluid> {
        self.fluids.get(usize::from(id.0))
    }

    /// Looks up a fluid id by registry name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidId> {
        self.by_name.get(name).copied()
    }

    /// Returns the registry name of a fluid.
    #[must_use]
    pub fn name_of(&self, id: FluidId) -> Option<&str> {
        self.get(id).map(|fluid| fluid.name.as_ref())
    }

    /// Finds the fluid whose block is `block`.
    #[must_use]
    pub fn lookup_fluid_for_block(&self, block: &Identifier) -> Option<FluidId> {
        self.by_block.get(block).copied()
    }

    /// Iterates all fluids in id order.
    pub fn iter(&self) -> impl Iterator<Item = (FluidId, &Fluid)> {
        self.fluids
            .iter()
            .enumerate()
            .map(|(index, fluid)| (FluidId(index as u16), fluid))
    }

    /// The number of registered fluids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fluids.len()
    }

    /// Always false, water and lava are built in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fluids.is_empty()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
