//! Tracing setup for the binary.
//!
//! Diagnostics go to stderr so reports and JSON on stdout stay clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects `debug`, falling
/// back to `default_filter` from the config.
pub fn init(default_filter: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { default_filter };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore a second init, e.g. from tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
