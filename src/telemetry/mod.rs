//! Logging initialization and the startup notice sink.
//!
//! Sets up tracing-subscriber with an env filter and a fmt layer writing to
//! stderr. `RUST_LOG` wins; otherwise the configured default level applies.

pub mod notice;

use crate::error::{Error, Result};

pub use notice::{NoNotice, StartupNotice, TracingNotice};

/// Configuration for telemetry initialization.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info").
    pub default_level: String,
    /// Use the compact single-line formatter.
    pub compact: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            compact: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the default level is not a valid filter directive or
/// a subscriber was already set.
pub fn init_telemetry(config: TelemetryConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_level).map_err(|e| {
            Error::Telemetry(format!("invalid log level {:?}: {e}", config.default_level))
        })?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.compact {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| Error::Telemetry(format!("failed to init tracing subscriber: {e}")))
}
