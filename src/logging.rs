//! Optional log output for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set, so it is safe to call
/// more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
