//! Moving fluids between containers and the world.

pub mod fluid_util;
