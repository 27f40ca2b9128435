//! Fluid definitions, the fluid registry and fluid stacks.

pub mod fluid;
pub mod fluid_stack;
pub mod registry;
pub mod vanilla;

pub use fluid::*;
pub use fluid_stack::FluidStack;
pub use registry::*;
