//! Logger bootstrap.
//!
//! Library code logs through the `log` macros; [`init`] installs a `tracing`
//! fmt subscriber filtered by `RUST_LOG` that also captures `log` records.

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber or logger was already installed, which
/// makes repeated calls from tests harmless.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // The `tracing-log` feature makes `try_init` install the `log` bridge too.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
