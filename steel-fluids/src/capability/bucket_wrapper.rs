//! Fluid handler over a single bucket stack.

use steel_registry::{
    Registry,
    fluid::{BUCKET_VOLUME, FluidId, FluidStack},
    item_stack::ItemStack,
    items::vanilla,
};

use super::{FluidHandler, FluidTankProperties};
use crate::behavior::items::universal_bucket::{MILK, UniversalBucket};

/// Exposes a bucket stack as a one-bucket tank.
///
/// Works for the vanilla buckets and for the universal bucket. Buckets are
/// filled and drained all at once: water, lava and milk turn the stack into
/// the matching vanilla bucket, any other bucket fluid into a filled
/// universal bucket.
///
/// Fills always take one [`BUCKET_VOLUME`], the amount a source block gives,
/// whatever the universal bucket's capacity. The filled stack still carries a
/// full-capacity payload.
pub struct FluidBucketWrapper<'a> {
    container: &'a mut ItemStack,
    bucket: &'a UniversalBucket,
    registry: &'a Registry,
}

impl<'a> FluidBucketWrapper<'a> {
    /// Wraps `container`, which must be a vanilla bucket or a stack of `bucket`.
    pub fn new(
        container: &'a mut ItemStack,
        bucket: &'a UniversalBucket,
        registry: &'a Registry,
    ) -> Self {
        Self {
            container,
            bucket,
            registry,
        }
    }

    /// The wrapped stack.
    #[must_use]
    pub fn container(&self) -> &ItemStack {
        self.container
    }

    fn is_milk(&self, fluid: FluidId) -> bool {
        self.registry.fluids.name_of(fluid) == Some(MILK)
    }

    fn is_universal(&self) -> bool {
        self.container.is(&self.bucket.key)
    }

    /// Returns whether a bucket can hold `fluid`.
    #[must_use]
    pub fn can_fill_from(&self, fluid: FluidId) -> bool {
        fluid == FluidId::WATER
            || fluid == FluidId::LAVA
            || self.is_milk(fluid)
            || self.registry.fluids.is_bucket_fluid(fluid)
    }

    /// The fluid currently in the container.
    #[must_use]
    pub fn fluid(&self) -> Option<FluidStack> {
        let item = self.container.item();
        if *item == vanilla::WATER_BUCKET {
            Some(FluidStack::new(FluidId::WATER, BUCKET_VOLUME))
        } else if *item == vanilla::LAVA_BUCKET {
            Some(FluidStack::new(FluidId::LAVA, BUCKET_VOLUME))
        } else if *item == vanilla::MILK_BUCKET {
            self.registry
                .fluids
                .get_by_name(MILK)
                .map(|milk| FluidStack::new(milk, BUCKET_VOLUME))
        } else if self.is_universal() {
            self.bucket.fluid(self.container, &self.registry.fluids)
        } else {
            None
        }
    }

    fn set_fluid(&mut self, fluid: Option<FluidId>) {
        let replacement = match fluid {
            None if self.is_universal() => self.bucket.empty_instance(),
            None => ItemStack::new(vanilla::BUCKET),
            Some(FluidId::WATER) => ItemStack::new(vanilla::WATER_BUCKET),
            Some(FluidId::LAVA) => ItemStack::new(vanilla::LAVA_BUCKET),
            Some(fluid) if self.is_milk(fluid) => ItemStack::new(vanilla::MILK_BUCKET),
            Some(fluid) if self.registry.fluids.is_bucket_fluid(fluid) => {
                self.bucket.filled_bucket(self.registry, fluid)
            }
            Some(_) => return,
        };
        *self.container = replacement;
    }
}

impl FluidHandler for FluidBucketWrapper<'_> {
    fn tank_properties(&self) -> Vec<FluidTankProperties> {
        let capacity = if self.is_universal() {
            self.bucket.capacity()
        } else {
            BUCKET_VOLUME
        };
        vec![FluidTankProperties::new(self.fluid(), capacity)]
    }

    fn fill(&mut self, resource: &FluidStack, do_fill: bool) -> i32 {
        if self.container.count() != 1
            || resource.amount < BUCKET_VOLUME
            || self.fluid().is_some()
            || !self.can_fill_from(resource.fluid)
        {
            return 0;
        }
        if do_fill {
            self.set_fluid(Some(resource.fluid));
        }
        BUCKET_VOLUME
    }

    fn drain(&mut self, resource: &FluidStack, do_drain: bool) -> Option<FluidStack> {
        if self.container.count() != 1 || resource.amount < BUCKET_VOLUME {
            return None;
        }
        let contained = self.fluid()?;
        if !contained.is_fluid_equal(resource) {
            return None;
        }
        if do_drain {
            self.set_fluid(None);
        }
        Some(contained)
    }

    fn drain_amount(&mut self, max_drain: i32, do_drain: bool) -> Option<FluidStack> {
        if self.container.count() != 1 || max_drain < BUCKET_VOLUME {
            return None;
        }
        let contained = self.fluid()?;
        if do_drain {
            self.set_fluid(None);
        }
        Some(contained)
    }
}
