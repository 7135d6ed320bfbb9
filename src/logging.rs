//! Tracing subscriber setup for applications embedding this crate.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to `level`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}
