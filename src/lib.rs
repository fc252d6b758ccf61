//! # Scour
//!
//! Credential scrubbing and connectivity diagnostics for development
//! pipelines.
//!
//! Scour bundles two small operational tools behind one binary:
//!
//! - A stdin-to-stdout content filter that replaces known credential
//!   literals (a Supabase project URL and its anon-key JWT) with fixed
//!   placeholders before content crosses a trust boundary. It is designed
//!   to sit behind a git `clean` filter.
//! - A minimal diagnostic HTTP server that answers every GET request with
//!   a static informational page, used to confirm network reachability.
//!
//! ## Example
//!
//! ```rust
//! use scour::CredentialRedactor;
//!
//! let redactor = CredentialRedactor::new();
//! let clean = redactor.redact(r#"const url = "https://piyqnldhdxkmuwqajkhz.supabase.co";"#);
//! assert_eq!(clean, r#"const url = "REDACTED_SUPABASE_URL";"#);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod observability;
pub mod security;
pub mod server;

// Re-exports for convenience
pub use config::{ScourConfig, ServerConfig};
pub use security::{CredentialRedactor, RedactOutcome};
pub use server::DiagServer;

/// Error type for scour operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A configuration value fails validation (e.g. an unparsable port)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Stdin or stdout I/O fails in the redact filter
    /// - The configuration file cannot be read or parsed
    /// - The tokio runtime cannot be created
    /// - The HTTP server fails while serving
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The diagnostic server could not bind its listening socket.
    ///
    /// Fatal for the process: the server never reaches the listening state.
    /// The usual cause is the port already being in use.
    #[error("failed to bind {addr}: {cause}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for scour operations.
pub type Result<T> = std::result::Result<T, Error>;
