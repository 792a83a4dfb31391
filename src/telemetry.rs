//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - `logging.level` is the EnvFilter directive; `RUST_LOG` wins when set.
//! - `logging.format` selects "pretty" (default) or "json" structured logs.
//! - Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use talent_compass::config::{LogFormat, LoggingConfig};

pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
