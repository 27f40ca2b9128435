//! Item definitions and the item registry.

mod item;
mod registry;
pub mod vanilla;

pub use item::{DEFAULT_MAX_STACK_SIZE, Item};
pub use registry::ItemRegistry;
