//! Structured logging setup.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Binaries call [`init_logging`] once at startup.
//!
//! Level guidelines used throughout the crate:
//! - **TRACE**: each server assignment
//! - **DEBUG**: run sizing and formula inputs
//! - **INFO**: completed simulation runs
//! - **WARN**: analytical results with no steady state
//!
//! `RUST_LOG` overrides the level passed in code:
//!
//! ```bash
//! RUST_LOG=queuesim::simulation=trace queuesim simulate scenario.yaml
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter level.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the default subscriber at [`DEFAULT_LEVEL`].
pub fn init_logging() {
    init_logging_with_level(DEFAULT_LEVEL);
}

/// Install a stderr subscriber at `level` for this crate.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
///
/// # Example
/// ```rust
/// use queuesim::logging::init_logging_with_level;
///
/// init_logging_with_level("debug");
/// // Second call is a no-op.
/// assert!(!init_logging_with_level("trace"));
/// ```
pub fn init_logging_with_level(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "logging initialized");
    }
    installed
}
