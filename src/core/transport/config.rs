//! Which MCP transport to start, chosen by `MCP_TRANSPORT`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TransportConfig {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// JSON-RPC over HTTP POST, one JSON document per request.
    #[cfg(feature = "http")]
    Http(HttpConfig),

    /// rmcp streamable HTTP service (SSE streams, session-managed).
    #[cfg(feature = "streamable-http")]
    StreamableHttp(HttpConfig),
}

/// Listener settings shared by both HTTP flavours.
#[cfg(any(feature = "http", feature = "streamable-http"))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Path the MCP endpoint is mounted at.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
fn default_cors() -> bool {
    true
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
const DEFAULT_HTTP_PORT: u16 = 8080;

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(
            not(feature = "stdio"),
            not(feature = "http"),
            feature = "streamable-http"
        ))]
        {
            return Self::StreamableHttp(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http", feature = "streamable-http")))]
        {
            compile_error!(
                "At least one transport feature must be enabled: stdio, http, or streamable-http"
            );
        }
    }
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(any(feature = "http", feature = "streamable-http"))]
impl HttpConfig {
    /// `MCP_HTTP_PORT`, `MCP_HTTP_HOST`, `MCP_HTTP_PATH`, `MCP_HTTP_CORS`.
    /// An unparsable port falls back to the default.
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("MCP_HTTP_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            host: lookup("MCP_HTTP_HOST").unwrap_or_else(default_host),
            rpc_path: lookup("MCP_HTTP_PATH").unwrap_or_else(default_rpc_path),
            enable_cors: crate::core::config::parse_flag(lookup("MCP_HTTP_CORS").as_deref()),
        }
    }
}

impl TransportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown or unset `MCP_TRANSPORT` values select the default transport.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(&lookup)),
            #[cfg(feature = "streamable-http")]
            "streamable-http" | "streamable_http" => {
                Self::StreamableHttp(HttpConfig::from_lookup(&lookup))
            }
            _ => Self::default(),
        }
    }

    /// Human-readable summary for the start-up log line.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
            #[cfg(feature = "streamable-http")]
            Self::StreamableHttp(cfg) => format!(
                "streamable HTTP on {}:{}{}",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unset_and_unknown_select_stdio() {
        assert!(matches!(
            TransportConfig::from_lookup(lookup_from(&[])),
            TransportConfig::Stdio
        ));
        assert!(matches!(
            TransportConfig::from_lookup(lookup_from(&[("MCP_TRANSPORT", "carrier-pigeon")])),
            TransportConfig::Stdio
        ));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "HTTP"),
            ("MCP_HTTP_PORT", "9000"),
            ("MCP_HTTP_HOST", "0.0.0.0"),
            ("MCP_HTTP_CORS", "off"),
        ]));
        assert_eq!(config.description(), "HTTP on 0.0.0.0:9000/mcp");
        match config {
            TransportConfig::Http(cfg) => assert!(!cfg.enable_cors),
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_bad_port_falls_back() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_PORT", "eighty"),
        ]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, DEFAULT_HTTP_PORT);
                assert!(cfg.enable_cors);
            }
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }

    #[cfg(feature = "streamable-http")]
    #[test]
    fn test_streamable_http_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "streamable-http"),
            ("MCP_HTTP_PATH", "/rpc"),
        ]));
        assert_eq!(config.description(), "streamable HTTP on 127.0.0.1:8080/rpc");
    }
}
