//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use solace_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable that overrides the configured filter.
pub const LOG_FILTER_ENV: &str = "SOLACE_LOG";

/// Initialize the global tracing subscriber.
///
/// `SOLACE_LOG` (an `EnvFilter` directive) takes precedence over
/// `config.log_level`. Idempotent; if another subscriber is already
/// installed this is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.json_logs;

    INIT.call_once(move || {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
