//! An amount of a fluid, optionally carrying extra NBT.

use simdnbt::owned::{NbtCompound, NbtTag};

use super::{FluidId, FluidRegistry};
use crate::nbt::{nbt_compound, nbt_i32, nbt_string};

/// An amount of a fluid.
///
/// Persisted as `{FluidName: string, Amount: int, Tag?: compound}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidStack {
    /// The fluid.
    pub fluid: FluidId,
    /// Amount in millibuckets.
    pub amount: i32,
    /// Extra data attached to the fluid.
    pub tag: Option<NbtCompound>,
}

impl FluidStack {
    /// Creates a stack without extra data.
    #[must_use]
    pub const fn new(fluid: FluidId, amount: i32) -> Self {
        Self {
            fluid,
            amount,
            tag: None,
        }
    }

    /// Creates a stack with extra data.
    #[must_use]
    pub const fn with_tag(fluid: FluidId, amount: i32, tag: NbtCompound) -> Self {
        Self {
            fluid,
            amount,
            tag: Some(tag),
        }
    }

    /// Returns a copy of this stack holding `amount`.
    #[must_use]
    pub fn copy_with_amount(&self, amount: i32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Same fluid and same extra data, ignoring the amount.
    #[must_use]
    pub fn is_fluid_equal(&self, other: &FluidStack) -> bool {
        self.fluid == other.fluid && self.tag == other.tag
    }

    /// Same fluid and extra data, and at least as much as `other`.
    #[must_use]
    pub fn contains_fluid(&self, other: &FluidStack) -> bool {
        self.is_fluid_equal(other) && self.amount >= other.amount
    }

    /// Writes this stack into `nbt`.
    ///
    /// Writes nothing if the fluid is not registered.
    pub fn write_to_nbt(&self, fluids: &FluidRegistry, nbt: &mut NbtCompound) {
        let Some(name) = fluids.name_of(self.fluid) else {
            log::warn!("Tried to save unregistered fluid {:?}", self.fluid);
            return;
        };
        nbt.insert("FluidName", NbtTag::String(name.into()));
        nbt.insert("Amount", NbtTag::Int(self.amount));
        if let Some(tag) = &self.tag {
            nbt.insert("Tag", NbtTag::Compound(tag.clone()));
        }
    }

    /// Returns this stack as a fresh compound.
    #[must_use]
    pub fn to_nbt(&self, fluids: &FluidRegistry) -> NbtCompound {
        let mut nbt = NbtCompound::new();
        self.write_to_nbt(fluids, &mut nbt);
        nbt
    }

    /// Reads a stack from `nbt`.
    ///
    /// Returns `None` for missing data, an unknown fluid name, or fields of
    /// the wrong type.
    #[must_use]
    pub fn load_from_nbt(nbt: Option<&NbtCompound>, fluids: &FluidRegistry) -> Option<Self> {
        let nbt = nbt?;
        let name = nbt.get("FluidName").and_then(nbt_string)?;
        let fluid = fluids.get_by_name(&name)?;
        let amount = nbt.get("Amount").and_then(nbt_i32)?;
        let tag = match nbt.get("Tag") {
            None => None,
            Some(tag) => Some(nbt_compound(tag)?.clone()),
        };
        Some(Self { fluid, amount, tag })
    }
}
