use steel_utils::Identifier;

/// Physical properties of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockConfig {
    /// Air blocks are treated as empty space.
    pub is_air: bool,
    /// Solid blocks stop fluids and cannot be replaced by them.
    pub solid: bool,
    /// Replaceable blocks are overwritten when something is placed into them.
    pub replaceable: bool,
    /// The block is a liquid.
    pub liquid: bool,
}

impl BlockConfig {
    /// A solid, full block.
    pub const SOLID: Self = Self {
        is_air: false,
        solid: true,
        replaceable: false,
        liquid: false,
    };

    /// Empty space.
    pub const AIR: Self = Self {
        is_air: true,
        solid: false,
        replaceable: true,
        liquid: false,
    };

    /// A non-solid block that gets replaced, like tall grass.
    pub const REPLACEABLE_PLANT: Self = Self {
        is_air: false,
        solid: false,
        replaceable: true,
        liquid: false,
    };

    /// A liquid.
    pub const LIQUID: Self = Self {
        is_air: false,
        solid: false,
        replaceable: true,
        liquid: true,
    };
}

/// A block definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The registry key.
    pub key: Identifier,
    /// Physical properties.
    pub config: BlockConfig,
}

impl Block {
    /// Creates a block.
    #[must_use]
    pub const fn new(key: Identifier, config: BlockConfig) -> Self {
        Self { key, config }
    }
}

/// A block placed in the world.
///
/// Liquids use `level`, 0 being a source block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockState {
    /// The block's key.
    pub block: Identifier,
    /// The liquid level, 0 for sources and non-liquids.
    pub level: u8,
}

impl BlockState {
    /// The default state of a block.
    #[must_use]
    pub const fn new(block: Identifier) -> Self {
        Self { block, level: 0 }
    }

    /// A liquid state at the given level.
    #[must_use]
    pub const fn with_level(block: Identifier, level: u8) -> Self {
        Self { block, level }
    }

    /// The air state.
    #[must_use]
    pub const fn air() -> Self {
        Self::new(super::vanilla::AIR)
    }

    /// Returns whether this state is of `block`.
    #[must_use]
    pub fn is(&self, block: &Identifier) -> bool {
        &self.block == block
    }

    /// Returns whether this is a liquid source (level 0).
    #[must_use]
    pub const fn is_source(&self) -> bool {
        self.level == 0
    }
}
