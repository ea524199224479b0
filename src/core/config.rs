//! Configuration management for the MCP server and the REST API.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally seeded from a `.env` file) and defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default endpoint of the public breed dataset.
pub const DEFAULT_BREEDS_URL: &str = "https://dogapi.dog/api/v2/breeds";

/// Main configuration structure.
///
/// Both binaries load the same structure; each reads the sections it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// MCP transport configuration.
    pub transport: TransportConfig,

    /// Upstream WAPI connection settings.
    pub infoblox: InfobloxConfig,

    /// REST API bind and manifest settings.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Connection settings for the WAPI and the breed dataset.
#[derive(Clone, Serialize, Deserialize)]
pub struct InfobloxConfig {
    /// WAPI base URL, e.g. `https://gm.example.com/wapi/v2.12`.
    pub base_url: String,

    /// Basic-auth user.
    pub username: String,

    /// Basic-auth password.
    #[serde(skip_serializing)]
    pub password: String,

    /// Verify the upstream TLS certificate.
    pub verify_ssl: bool,

    /// Endpoint of the breed listing.
    pub breeds_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for InfobloxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfobloxConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("verify_ssl", &self.verify_ssl)
            .field("breeds_url", &self.breeds_url)
            .finish()
    }
}

/// REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Location of the static manifest document.
    pub manifest_path: PathBuf,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

impl InfobloxConfig {
    /// Create connection settings with verification on and the default breed endpoint.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            verify_ssl: true,
            breeds_url: DEFAULT_BREEDS_URL.to_string(),
        }
    }

    /// Override the breed endpoint.
    pub fn with_breeds_url(mut self, url: impl Into<String>) -> Self {
        self.breeds_url = url.into();
        self
    }

    /// Load connection settings through `lookup` (usually the process environment).
    ///
    /// `WAPI_URL`, `WAPI_USER` and `WAPI_PASS` must be present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = required("WAPI_URL");
        let username = required("WAPI_USER");
        let password = required("WAPI_PASS");

        let (base_url, username, password) = match (base_url, username, password) {
            (Some(url), Some(user), Some(pass)) => (url, user, pass),
            (url, user, pass) => {
                let missing: Vec<&str> = [
                    ("WAPI_URL", url.is_none()),
                    ("WAPI_USER", user.is_none()),
                    ("WAPI_PASS", pass.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();
                return Err(Error::config(format!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                )));
            }
        };

        let mut config = Self::new(base_url, username, password);
        config.verify_ssl = parse_flag(lookup("WAPI_VERIFY_SSL").as_deref());

        if let Some(url) = lookup("BREEDS_API_URL").filter(|v| !v.is_empty()) {
            config.breeds_url = url;
        }

        Ok(config)
    }
}

/// Interpret an on/off flag. Anything but an explicit "off" value is on.
pub fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) => !matches!(v.as_str(), "false" | "0" | "no" | "off"),
        None => true,
    }
}

impl Default for InfobloxConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new(), String::new())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            manifest_path: PathBuf::from("manifest.json"),
            enable_cors: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "infoblox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            infoblox: InfobloxConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails if any required WAPI connection setting is missing; the caller
    /// must not start serving in that case.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(Some(&timestamps));
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.infoblox = InfobloxConfig::from_lookup(|key| std::env::var(key).ok())?;

        if let Ok(host) = std::env::var("MCP_API_HOST") {
            config.api.host = host;
        }

        if let Some(port) = std::env::var("MCP_API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.api.port = port;
        }

        if let Ok(path) = std::env::var("MCP_MANIFEST_PATH") {
            config.api.manifest_path = PathBuf::from(path);
        }

        if let Ok(cors) = std::env::var("MCP_API_CORS") {
            config.api.enable_cors = parse_flag(Some(&cors));
        }

        Ok(config)
    }
}
