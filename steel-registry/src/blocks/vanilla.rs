//! The vanilla blocks the bucket system interacts with.

use steel_utils::Identifier;

use super::{Block, BlockConfig};

/// Air.
pub const AIR: Identifier = Identifier::vanilla_static("air");
/// Stone.
pub const STONE: Identifier = Identifier::vanilla_static("stone");
/// Dirt.
pub const DIRT: Identifier = Identifier::vanilla_static("dirt");
/// Tall grass.
pub const TALL_GRASS: Identifier = Identifier::vanilla_static("tallgrass");
/// Water.
pub const WATER: Identifier = Identifier::vanilla_static("water");
/// Lava.
pub const LAVA: Identifier = Identifier::vanilla_static("lava");
/// Dispenser.
pub const DISPENSER: Identifier = Identifier::vanilla_static("dispenser");

/// Returns the vanilla block definitions.
#[must_use]
pub fn blocks() -> Vec<Block> {
    vec![
        Block::new(AIR, BlockConfig::AIR),
        Block::new(STONE, BlockConfig::SOLID),
        Block::new(DIRT, BlockConfig::SOLID),
        Block::new(TALL_GRASS, BlockConfig::REPLACEABLE_PLANT),
        Block::new(WATER, BlockConfig::LIQUID),
        Block::new(LAVA, BlockConfig::LIQUID),
        Block::new(DISPENSER, BlockConfig::SOLID),
    ]
}
