// src/utils/logging.rs
use tracing_subscriber::{fmt, fmt::time::ChronoLocal, EnvFilter};

/// Sets up the logging framework using tracing_subscriber.
/// Reads log level filters from the `RUST_LOG` environment variable,
/// defaulting to "info". Lines are prefixed with an `HH:MM:SS` timestamp.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
