//! Diagnostic page rendering.

use crate::config::ServerConfig;
use chrono::{DateTime, Utc};

/// Immutable startup snapshot substituted into the diagnostic page.
///
/// Captured once when the server binds; request handling only adds the
/// requested path and a timestamp.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Package name and version string.
    pub server_version: String,
    /// Host the server was configured to bind.
    pub host: String,
    /// Port the server was configured to bind.
    pub port: u16,
    /// Working directory at startup.
    pub working_dir: String,
}

impl PageContext {
    /// Builds a page context from server configuration.
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        let working_dir = std::env::current_dir()
            .map_or_else(|_| "(unknown)".to_string(), |p| p.display().to_string());

        Self {
            server_version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            host: config.host.clone(),
            port: config.port,
            working_dir,
        }
    }
}

/// Renders the diagnostic HTML page.
///
/// Values are substituted as plain text; the page is informational and
/// carries no application data.
#[must_use]
pub fn render(ctx: &PageContext, request_path: &str, now: DateTime<Utc>) -> String {
    let timestamp = now.format("%a, %d %b %Y %H:%M:%S GMT");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Scour Test Server</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
        .success {{ color: green; font-weight: bold; }}
        .info {{ background-color: #f8f9fa; padding: 10px; border-radius: 4px; }}
    </style>
</head>
<body>
    <h1>Server is Running!</h1>
    <p class="success">If you can see this page, the server is working correctly.</p>

    <div class="info">
        <h2>Server Information</h2>
        <p>Server: {version}</p>
        <p>Host: {host}</p>
        <p>Port: {port}</p>
        <p>Working Directory: {working_dir}</p>
        <p>Request Path: {request_path}</p>
        <p>Server Time: {timestamp}</p>
    </div>
</body>
</html>
"#,
        version = ctx.server_version,
        host = ctx.host,
        port = ctx.port,
        working_dir = ctx.working_dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> PageContext {
        PageContext {
            server_version: "scour 0.0.0".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            working_dir: "/tmp/work".to_string(),
        }
    }

    #[test]
    fn test_render_embeds_request_path_and_port() {
        let html = render(&test_context(), "/foo/bar", Utc::now());

        assert!(html.contains("Request Path: /foo/bar"));
        assert!(html.contains("Port: 8080"));
        assert!(html.contains("Host: 127.0.0.1"));
        assert!(html.contains("Working Directory: /tmp/work"));
        assert!(html.contains("scour 0.0.0"));
    }

    #[test]
    fn test_render_timestamp_format() {
        let now = DateTime::from_timestamp(0, 0).unwrap_or_default();
        let html = render(&test_context(), "/", now);

        assert!(html.contains("Server Time: Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_context_captures_version() {
        let ctx = PageContext::new(&ServerConfig::default());
        assert!(ctx.server_version.starts_with("scour "));
    }
}
