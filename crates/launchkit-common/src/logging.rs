//! Tracing subscriber setup.
//!
//! Filters come from `RUST_LOG` when set, falling back to `info` for the
//! LaunchKit crates.

use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

use crate::CommonError;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a human-readable fmt subscriber.
pub fn init() -> Result<(), CommonError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .map_err(|_| CommonError::LoggingAlreadyInitialized)?;

    tracing::debug!("Logging initialized");
    Ok(())
}

/// Install a JSON subscriber with RFC 3339 timestamps.
pub fn init_json() -> Result<(), CommonError> {
    tracing_subscriber::fmt()
        .json()
        .with_timer(ChronoUtc::rfc_3339())
        .with_env_filter(env_filter())
        .with_current_span(false)
        .try_init()
        .map_err(|_| CommonError::LoggingAlreadyInitialized)?;

    tracing::debug!("JSON logging initialized");
    Ok(())
}

/// Install a test writer subscriber; repeated calls are ignored.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init();
}
