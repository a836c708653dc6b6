use tracing_subscriber::{EnvFilter, fmt};

/// Initializes tracing using the `RUST_LOG` environment variable.
///
/// If `RUST_LOG` is not set or fails to parse, logging defaults to the `info`
/// level. Tests should prefer [`try_init`], which does not panic when a
/// subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    try_init().map_err(|e| anyhow::anyhow!(e))
}

/// Attempts to initialize tracing and returns an error if a subscriber is
/// already set.
pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).try_init()
}
