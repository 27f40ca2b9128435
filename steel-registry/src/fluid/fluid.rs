//! Fluid definitions.

use std::borrow::Cow;

use steel_utils::Identifier;

/// The volume of one bucket, in millibuckets.
pub const BUCKET_VOLUME: i32 = 1000;

/// Fluid ID - the index a fluid was registered at.
///
/// Water and lava are always registered first, see [`FluidId::WATER`] and
/// [`FluidId::LAVA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FluidId(pub u16);

impl FluidId {
    /// Water source (ID: 0)
    pub const WATER: FluidId = FluidId(0);
    /// Lava source (ID: 1)
    pub const LAVA: FluidId = FluidId(1);
}

/// A fluid definition.
#[derive(Debug, Clone)]
pub struct Fluid {
    /// Registry name, e.g. `water`. Persisted in fluid NBT.
    pub name: Cow<'static, str>,
    /// Name used to build the translation key `fluid.<unlocalized_name>`.
    pub unlocalized_name: Cow<'static, str>,
    /// The block placed when the fluid is poured into the world.
    pub block: Option<Identifier>,
    /// Light level emitted by the fluid.
    pub luminosity: i32,
    /// Density in kg/m^3, water is 1000.
    pub density: i32,
    /// Temperature in kelvin, water is 300.
    pub temperature: i32,
    /// Viscosity, water is 1000.
    pub viscosity: i32,
    /// Whether the fluid is a gas.
    pub gaseous: bool,
    /// Whether the fluid boils away instead of being placed in ultra-warm worlds.
    pub vaporizes: bool,
    /// Sound played when a container is filled with this fluid.
    pub fill_sound: Identifier,
    /// Sound played when this fluid is poured out.
    pub empty_sound: Identifier,
}

impl Fluid {
    /// Creates a fluid with water-like defaults and no block.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self {
            unlocalized_name: name.clone(),
            name,
            block: None,
            luminosity: 0,
            density: 1000,
            temperature: 300,
            viscosity: 1000,
            gaseous: false,
            vaporizes: false,
            fill_sound: Identifier::vanilla_static("item.bucket.fill"),
            empty_sound: Identifier::vanilla_static("item.bucket.empty"),
        }
    }

    /// Sets the block this fluid places.
    #[must_use]
    pub fn with_block(mut self, block: Identifier) -> Self {
        self.block = Some(block);
        self
    }

    /// Sets the unlocalized name.
    #[must_use]
    pub fn with_unlocalized_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.unlocalized_name = name.into();
        self
    }

    /// Sets the fill and empty sounds.
    #[must_use]
    pub fn with_sounds(mut self, fill: Identifier, empty: Identifier) -> Self {
        self.fill_sound = fill;
        self.empty_sound = empty;
        self
    }

    /// The translation key of this fluid.
    #[must_use]
    pub fn translation_key(&self) -> String {
        format!("fluid.{}", self.unlocalized_name)
    }
}
