//! Behaviors of individual items.

pub mod bucket;
pub mod universal_bucket;
