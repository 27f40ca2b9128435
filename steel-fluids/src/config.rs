//! Settings for the universal bucket, read from `fluids_config.json5`.

use std::{fs, io, path::Path};

use serde::Deserialize;
use steel_registry::fluid::BUCKET_VOLUME;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/fluids_config.json5");

/// Errors raised while loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Universal bucket settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    /// How much fluid the universal bucket holds.
    pub universal_bucket_capacity: i32,
    /// Whether the empty item is matched by NBT as well as by item.
    pub nbt_sensitive: bool,
    /// Selects the strict empty-item matcher for fill events.
    pub strict_nbt_matching: bool,
    /// Registers milk as a fluid.
    pub enable_milk: bool,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            universal_bucket_capacity: BUCKET_VOLUME,
            nbt_sensitive: false,
            strict_nbt_matching: false,
            enable_milk: true,
        }
    }
}

impl FluidConfig {
    /// Loads the config at `path`, writing the default file first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::from_json5(&fs::read_to_string(path)?)?;
            log::info!("Loaded fluid config from {}", path.display());
            Ok(config)
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_CONFIG)?;
            log::info!("Wrote default fluid config to {}", path.display());
            Self::from_json5(DEFAULT_CONFIG)
        }
    }

    /// Parses and validates a config.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: FluidConfig = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.universal_bucket_capacity <= 0 {
            return Err(ConfigError::Invalid(
                "Universal bucket capacity must be positive",
            ));
        }
        Ok(())
    }
}
