//! Block definitions and the block registry.

mod block;
mod registry;
pub mod vanilla;

pub use block::{Block, BlockConfig, BlockState};
pub use registry::BlockRegistry;
