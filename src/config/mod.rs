//! Configuration management.

use serde::Deserialize;

/// Default host the diagnostic server binds (all interfaces).
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the diagnostic server.
const DEFAULT_PORT: u16 = 8080;

/// Main configuration for scour.
#[derive(Debug, Clone, Default)]
pub struct ScourConfig {
    /// Diagnostic server settings.
    pub server: ServerConfig,
}

/// Startup configuration for the diagnostic server.
///
/// Carried as explicit constructor input rather than module-level globals so
/// tests can bind arbitrary addresses.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind (defaults to all interfaces).
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Whether to attempt a local browser launch after binding.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    /// Creates a server configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bind host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the bind port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables or disables the best-effort browser launch.
    #[must_use]
    pub const fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    /// Returns the `host:port` form used in console messages.
    #[must_use]
    pub fn display_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Server section.
    pub server: Option<ConfigFileServer>,
}

/// Server section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileServer {
    /// Bind host.
    pub host: Option<String>,
    /// Bind port.
    pub port: Option<u16>,
    /// Browser launch toggle.
    pub open_browser: Option<bool>,
}

impl ScourConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/scour/` on macOS)
    /// 2. XDG config dir (`~/.config/scour/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        // Check platform-specific config dir first
        let platform_config = base_dirs.config_dir().join("scour").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        // Fall back to XDG-style ~/.config/scour/ for Unix compatibility
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("scour")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `ScourConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(server) = file.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(open) = server.open_browser {
                config.server.open_browser = open;
            }
        }

        config
    }

    /// Replaces the server settings.
    #[must_use]
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScourConfig::new();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.open_browser);
    }

    #[test]
    fn test_display_addr() {
        let server = ServerConfig::new().with_host("127.0.0.1").with_port(9000);
        assert_eq!(server.display_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_from_config_file_partial() {
        let file = ConfigFile {
            server: Some(ConfigFileServer {
                host: None,
                port: Some(9090),
                open_browser: Some(false),
            }),
        };
        let config = ScourConfig::from_config_file(file);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert!(!config.server.open_browser);
    }

    #[test]
    fn test_from_config_file_empty() {
        let config = ScourConfig::from_config_file(ConfigFile::default());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap_or_else(|e| {
            panic!("failed to create temp file: {e}");
        });
        writeln!(tmp, "[server]\nhost = \"127.0.0.1\"\nport = 3030").unwrap_or_else(|e| {
            panic!("failed to write temp file: {e}");
        });

        let config = match ScourConfig::load_from_file(tmp.path()) {
            Ok(config) => config,
            Err(e) => panic!("load_from_file failed: {e}"),
        };
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3030);
        assert!(config.server.open_browser);
    }

    #[test]
    fn test_load_from_file_malformed() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap_or_else(|e| {
            panic!("failed to create temp file: {e}");
        });
        writeln!(tmp, "[server\nport = ").unwrap_or_else(|e| {
            panic!("failed to write temp file: {e}");
        });

        let result = ScourConfig::load_from_file(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_missing() {
        let result =
            ScourConfig::load_from_file(std::path::Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }
}
