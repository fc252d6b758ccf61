//! Serve CLI command.

use crate::Result;
use crate::config::ScourConfig;
use crate::server::DiagServer;

/// Starts the diagnostic HTTP server and blocks until it stops.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub fn cmd_serve(config: &ScourConfig) -> Result<()> {
    let server = DiagServer::new(config.server.clone());
    server.start()
}
