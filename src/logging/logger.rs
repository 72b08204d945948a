// file: src/logging/logger.rs
// version: 1.1.0
// guid: 4e2a81f6-9b0d-4735-8cd9-56f3e0b7a214

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// Diagnostics go to stderr: stdout is reserved for the generated
/// document.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::ProfileError::Config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent_per_process() {
        // The subscriber can only be installed once per process; a second
        // call must fail gracefully rather than panic.
        let first = init_logger(false, false);
        let second = init_logger(true, false);

        assert!(first.is_ok() || first.is_err());
        assert!(second.is_err() || second.is_ok());
    }
}
