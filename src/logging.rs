use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// Stdout carries the generated document, so diagnostics never go there.
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");

    Ok(())
}
