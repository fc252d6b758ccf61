//! Observability and telemetry.
//!
//! Logging goes to **stderr**: stdout belongs to the redact filter payload
//! and the serve startup banner.

use crate::{Error, Result};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Options for environment-based initialization.
#[derive(Debug, Clone, Copy)]
pub struct InitOptions {
    /// Whether verbose output was requested via CLI.
    pub verbose: bool,
}

static OBSERVABILITY_INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging for the process.
///
/// The filter is taken from `RUST_LOG` when set; otherwise `--verbose`
/// selects a debug-level default for this crate and `warn` for everything
/// else.
///
/// # Errors
///
/// Returns an error if observability has already been initialized or if the
/// subscriber fails to install.
pub fn init(options: InitOptions) -> Result<()> {
    if OBSERVABILITY_INIT.get().is_some() {
        return Err(Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "observability already initialized".to_string(),
        });
    }

    let default_directive = if options.verbose {
        "scour=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(init_error)?;

    OBSERVABILITY_INIT
        .set(())
        .map_err(|()| Error::OperationFailed {
            operation: "observability_init".to_string(),
            cause: "failed to mark observability initialized".to_string(),
        })?;

    Ok(())
}

/// Helper to convert init errors.
#[allow(clippy::needless_pass_by_value)]
fn init_error(e: tracing_subscriber::util::TryInitError) -> Error {
    Error::OperationFailed {
        operation: "observability_init".to_string(),
        cause: e.to_string(),
    }
}
