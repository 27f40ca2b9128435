//! Fluid handler over a liquid block in the world.

use steel_registry::{
    Registry,
    blocks::BlockState,
    fluid::{BUCKET_VOLUME, FluidId, FluidStack},
};
use steel_utils::{BlockPos, UpdateFlags};

use super::{FluidHandler, FluidTankProperties};
use crate::world::World;

/// A liquid block seen as a one-bucket tank.
///
/// Only source blocks can be drained; draining replaces them with air.
pub struct FluidBlockWrapper<'a> {
    world: &'a mut dyn World,
    registry: &'a Registry,
    pos: BlockPos,
    fluid: FluidId,
}

impl<'a> FluidBlockWrapper<'a> {
    /// Wraps the block at `pos`, or returns `None` if it is not the block of
    /// a registered fluid.
    pub fn new(world: &'a mut dyn World, registry: &'a Registry, pos: BlockPos) -> Option<Self> {
        let state = world.get_block_state(&pos);
        if !registry.blocks.config(&state.block).liquid {
            return None;
        }
        let fluid = registry.fluids.lookup_fluid_for_block(&state.block)?;
        Some(Self {
            world,
            registry,
            pos,
            fluid,
        })
    }

    /// The fluid this block is made of.
    #[must_use]
    pub fn fluid(&self) -> FluidId {
        self.fluid
    }

    /// A bucket of this fluid if the block is still a source.
    fn source(&self) -> Option<FluidStack> {
        let block = self.registry.fluids.get(self.fluid)?.block.as_ref()?;
        let state = self.world.get_block_state(&self.pos);
        (state.is(block) && state.is_source()).then(|| FluidStack::new(self.fluid, BUCKET_VOLUME))
    }

    fn remove_source(&mut self) {
        self.world.set_block(
            self.pos,
            BlockState::air(),
            UpdateFlags::UPDATE_ALL_IMMEDIATE,
        );
    }
}

impl FluidHandler for FluidBlockWrapper<'_> {
    fn tank_properties(&self) -> Vec<FluidTankProperties> {
        vec![FluidTankProperties {
            contents: self.source(),
            capacity: BUCKET_VOLUME,
            can_fill: false,
            can_drain: true,
        }]
    }

    fn fill(&mut self, _resource: &FluidStack, _do_fill: bool) -> i32 {
        0
    }

    fn drain(&mut self, resource: &FluidStack, do_drain: bool) -> Option<FluidStack> {
        let source = self.source()?;
        if !resource.contains_fluid(&source) {
            return None;
        }
        if do_drain {
            self.remove_source();
        }
        Some(source)
    }

    fn drain_amount(&mut self, max_drain: i32, do_drain: bool) -> Option<FluidStack> {
        if max_drain < BUCKET_VOLUME {
            return None;
        }
        let source = self.source()?;
        if do_drain {
            self.remove_source();
        }
        Some(source)
    }
}

#[cfg(test)]
mod tests {
    use steel_registry::blocks::vanilla;

    use super::*;
    use crate::testing::TestWorld;

    #[test]
    fn test_drain_source() {
        let registry = Registry::vanilla();
        let mut world = TestWorld::new();
        let pos = BlockPos::new(0, 64, 0);
        world.put(pos, BlockState::new(vanilla::LAVA));

        let mut wrapper = FluidBlockWrapper::new(&mut world, &registry, pos).expect("lava is a fluid");
        assert_eq!(wrapper.drain_amount(BUCKET_VOLUME - 1, true), None);
        assert_eq!(
            wrapper.drain_amount(BUCKET_VOLUME, false),
            Some(FluidStack::new(FluidId::LAVA, BUCKET_VOLUME))
        );
        assert_eq!(
            wrapper.drain(&FluidStack::new(FluidId::WATER, BUCKET_VOLUME), true),
            None
        );
        assert!(wrapper.drain_amount(BUCKET_VOLUME, true).is_some());
        assert_eq!(wrapper.fill(&FluidStack::new(FluidId::LAVA, BUCKET_VOLUME), true), 0);
        assert_eq!(world.get_block_state(&pos), BlockState::air());
    }

    #[test]
    fn test_flowing_liquid_cannot_be_drained() {
        let registry = Registry::vanilla();
        let mut world = TestWorld::new();
        let pos = BlockPos::new(0, 64, 0);
        world.put(pos, BlockState::with_level(vanilla::WATER, 2));

        let mut wrapper = FluidBlockWrapper::new(&mut world, &registry, pos).expect("water is a fluid");
        assert_eq!(wrapper.drain_amount(i32::MAX, true), None);
        assert!(wrapper.tank_properties()[0].contents.is_none());
    }

    #[test]
    fn test_solid_block_has_no_handler() {
        let registry = Registry::vanilla();
        let mut world = TestWorld::new();
        let pos = BlockPos::new(0, 64, 0);
        world.put(pos, BlockState::new(vanilla::STONE));
        assert!(FluidBlockWrapper::new(&mut world, &registry, pos).is_none());
    }
}
