//! Diagnostic HTTP server.
//!
//! Serves a single static informational page for every GET request,
//! regardless of path. The server exists to confirm reachability, not to
//! serve application functionality.

mod page;

pub use page::PageContext;

use crate::config::ServerConfig;
use crate::{Error, Result};
use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Diagnostic HTTP server.
pub struct DiagServer {
    config: ServerConfig,
}

impl DiagServer {
    /// Creates a server from explicit startup configuration.
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the request router.
    ///
    /// Every path answers GET with the diagnostic page. Other methods fall
    /// through to the method router's default rejection.
    #[must_use]
    pub fn router(ctx: Arc<PageContext>) -> Router {
        Router::new()
            .route("/", get(diagnostic_page))
            .route("/{*path}", get(diagnostic_page))
            .layer(CorsLayer::new().allow_origin(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(ctx)
    }

    /// Binds the listening socket.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound (e.g. the port
    /// is already in use). This is fatal: the server never starts listening.
    pub async fn bind(&self) -> Result<BoundServer> {
        let listener = tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| Error::Bind {
                addr: self.config.display_addr(),
                cause: e.to_string(),
            })?;

        // Port 0 resolves at bind time; the page shows the assigned port.
        let local = listener.local_addr().map_err(|e| Error::OperationFailed {
            operation: "local_addr".to_string(),
            cause: e.to_string(),
        })?;
        let resolved = self.config.clone().with_port(local.port());
        let ctx = Arc::new(PageContext::new(&resolved));

        Ok(BoundServer {
            listener,
            router: Self::router(ctx),
        })
    }

    /// Binds and serves until interrupted.
    ///
    /// Prints the listening address and candidate URLs for the operator,
    /// then makes a best-effort attempt to open a local browser at the root
    /// URL before handing the socket to the runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be created, the bind fails, or
    /// the server fails while serving.
    pub fn start(&self) -> Result<()> {
        let rt = tokio::runtime::Runtime::new().map_err(|e| Error::OperationFailed {
            operation: "create_runtime".to_string(),
            cause: e.to_string(),
        })?;

        rt.block_on(async {
            let bound = self.bind().await?;
            let addr = bound.local_addr()?;

            self.announce(addr);

            if self.config.open_browser {
                // Best-effort: headless environments have no browser, and
                // that must not affect startup.
                let _ = webbrowser::open(&format!("http://localhost:{}/", addr.port()));
            }

            tracing::info!(host = %self.config.host, port = addr.port(), "diagnostic server listening");

            bound.serve().await
        })
    }

    /// Prints the startup banner with candidate URLs.
    #[allow(clippy::print_stdout)]
    fn announce(&self, addr: SocketAddr) {
        println!("Server started at http://{}:{}", self.config.host, addr.port());
        println!("Try accessing:");
        println!("- http://localhost:{}/", addr.port());
        println!("- http://127.0.0.1:{}/", addr.port());
        println!("Press Ctrl+C to stop the server");
    }
}

/// A server whose listening socket is bound but not yet serving.
///
/// Split from [`DiagServer::start`] so tests can bind port 0 and read the
/// assigned address before serving.
pub struct BoundServer {
    listener: tokio::net::TcpListener,
    router: Router,
}

impl BoundServer {
    /// Returns the bound local address.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be read back.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| Error::OperationFailed {
                operation: "local_addr".to_string(),
                cause: e.to_string(),
            })
    }

    /// Serves requests until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying server fails.
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::OperationFailed {
                operation: "serve".to_string(),
                cause: e.to_string(),
            })
    }
}

/// Resolves when the operator interrupts the process.
async fn shutdown_signal() {
    // If the handler cannot install, fall back to default process teardown.
    let _ = tokio::signal::ctrl_c().await;
}

/// Renders the diagnostic page for any GET request.
async fn diagnostic_page(State(ctx): State<Arc<PageContext>>, uri: Uri) -> Html<String> {
    Html(page::render(&ctx, uri.path(), Utc::now()))
}
