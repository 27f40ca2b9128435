//! # Steel Utils
//!
//! Small shared types used across the Steel crates: identifiers, positions,
//! directions, vectors, translations and the logger bootstrap.

pub mod direction;
pub mod logger;
pub mod math;
pub mod text;
pub mod types;

pub use direction::Direction;
pub use types::{BlockPos, Identifier, InteractionHand, UpdateFlags};
