//! # Steel Fluids
//!
//! The universal bucket: one item that carries any bucket fluid, tracked in
//! the stack's NBT tag. Also contains the pieces it plugs into, such as the
//! fluid handler capability, the fill bucket event, dispenser behaviors and
//! the `World` and `Player` traits a server implements.

pub mod behavior;
pub mod capability;
pub mod config;
pub mod dispenser;
pub mod event;
pub mod fluid;
pub mod host;
pub mod inventory;
pub mod player;
pub mod world;

#[cfg(test)]
mod testing;

use std::path::Path;

pub use behavior::items::universal_bucket::{BucketError, UNIVERSAL_BUCKET, UniversalBucket};
pub use config::{ConfigError, FluidConfig};
pub use host::Host;

/// Loads the fluid config at `config_path`, creating it if missing, and
/// returns a frozen host with the universal bucket installed.
///
/// Mods that add bucket fluids should use [`Host::new`] instead and register
/// them before installing the bucket.
pub fn bootstrap(config_path: &Path) -> Result<Host, BucketError> {
    let config = FluidConfig::load_or_create(config_path)?;
    let mut host = Host::default();
    host.install_universal_bucket(&config)?;
    host.freeze();
    Ok(host)
}
