use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "BOUNCE_SIM_LOG";

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Filters come from `BOUNCE_SIM_LOG`, then `RUST_LOG`, defaulting to `info` for this crate.
pub fn init() -> crate::error::Result<()> {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "bounce_sim=info,headless=info".to_string());

    let filters = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .parse_lossy(directives);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filters);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .map_err(|error| crate::error::Error::Logging(error.to_string()))
}
