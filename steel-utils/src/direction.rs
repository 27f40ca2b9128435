//! The six block faces.

use crate::BlockPos;

/// One of the six axis-aligned directions.
///
/// The ordinal values (0-5) match vanilla's `Direction` ordering.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y direction)
    Down = 0,
    /// Upward (+Y direction)
    Up = 1,
    /// North (-Z direction)
    North = 2,
    /// South (+Z direction)
    South = 3,
    /// West (-X direction)
    West = 4,
    /// East (+X direction)
    East = 5,
}

impl Direction {
    /// All six directions in array form for iteration.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Gets the offset in the given direction.
    ///
    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Returns a new `BlockPos` relative to the given position in this direction.
    #[must_use]
    pub const fn relative(self, pos: &BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }

    /// Returns the direction closest to the given vector.
    ///
    /// A zero vector resolves to `North`, like vanilla.
    #[must_use]
    pub fn nearest(x: f64, y: f64, z: f64) -> Self {
        let mut best = Self::North;
        let mut best_dot = f64::MIN;
        for direction in Self::ALL {
            let (dx, dy, dz) = direction.offset();
            let dot = x * f64::from(dx) + y * f64::from(dy) + z * f64::from(dz);
            if dot > best_dot {
                best_dot = dot;
                best = direction;
            }
        }
        if best_dot <= 0.0 { Self::North } else { best }
    }
}
