//! Vanilla fluids.

use steel_utils::Identifier;

use super::Fluid;

/// Water, placed as `minecraft:water`.
#[must_use]
pub fn water() -> Fluid {
    let mut fluid = Fluid::new("water")
        .with_block(Identifier::vanilla_static("water"))
        .with_unlocalized_name("tile.water");
    fluid.vaporizes = true;
    fluid
}

/// Lava, placed as `minecraft:lava`.
#[must_use]
pub fn lava() -> Fluid {
    let mut fluid = Fluid::new("lava")
        .with_block(Identifier::vanilla_static("lava"))
        .with_unlocalized_name("tile.lava")
        .with_sounds(
            Identifier::vanilla_static("item.bucket.fill_lava"),
            Identifier::vanilla_static("item.bucket.empty_lava"),
        );
    fluid.luminosity = 15;
    fluid.density = 3000;
    fluid.viscosity = 6000;
    fluid.temperature = 1300;
    fluid
}

/// Milk. Has no block and is only registered when enabled.
#[must_use]
pub fn milk() -> Fluid {
    Fluid::new("milk")
}
