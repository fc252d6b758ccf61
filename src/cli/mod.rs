//! CLI command implementations.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `redact` | Filter stdin to stdout, replacing known credential literals |
//! | `serve` | Run the diagnostic HTTP server until interrupted |
//!
//! # Example Usage
//!
//! ```bash
//! # Scrub credentials from piped content
//! cat src/client.ts | scour redact
//!
//! # As a git clean filter (.git/config)
//! #   [filter "scour"]
//! #       clean = scour redact
//!
//! # Verify network reachability
//! scour serve
//! ```

mod redact;
mod serve;

pub use redact::cmd_redact;
pub use serve::cmd_serve;
