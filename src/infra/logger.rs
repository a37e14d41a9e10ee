// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber. FRIDGEFEAST_LOG wins over RUST_LOG,
/// which wins over the built-in default level.
pub fn init_logging(level: &str) {
    let filter = std::env::var("FRIDGEFEAST_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
