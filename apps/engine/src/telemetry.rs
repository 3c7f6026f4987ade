//! Tracing setup for processes that host the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::EngineError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,bidwhist_engine=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    Json,
    /// Human-readable lines.
    Plain,
}

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Fails with a configuration error if a subscriber is already installed.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> Result<(), EngineError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
        LogFormat::Plain => registry.with(fmt::layer().with_target(false)).try_init(),
    };
    result.map_err(|e| EngineError::config(format!("tracing already initialised: {e}")))
}
