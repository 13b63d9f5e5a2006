//! Structured logging bootstrap for the Glade streamer.
//!
//! Installs a `tracing` subscriber with console output, timestamps, and
//! module paths. Filtering respects `RUST_LOG`, falling back to the config
//! file's `debug.log_level`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use glade_config::Config;

/// Initialize the tracing subscriber.
///
/// The filter is resolved in priority order: the `RUST_LOG` environment
/// variable, then `config.debug.log_level`, then `"info"`.
///
/// Call once at startup; a second call would fail to set the global
/// subscriber and is ignored.
pub fn init_logging(config: Option<&Config>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("info");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
