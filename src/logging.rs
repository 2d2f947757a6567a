//! Tracing subscriber setup for the command line front end.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the settings name one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a stderr subscriber. `RUST_LOG` wins over `fallback`.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_LOG_FILTER)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
