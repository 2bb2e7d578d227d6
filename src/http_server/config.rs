//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS settings,
//! the store file, and the primary-key mode.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which column serves as the observations primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Auto-assigned integer `id` column.
    #[default]
    SurrogateId,
    /// The `radius` field itself.
    NaturalRadius,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, which allows any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// SQLite file holding the observations table (default: "data.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Primary-key mode for the observations table
    #[serde(default)]
    pub key_mode: KeyMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data.db")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_path: default_database_path(),
            key_mode: KeyMode::default(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_path, PathBuf::from("data.db"));
        assert_eq!(config.key_mode, KeyMode::SurrogateId);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"key_mode": "natural_radius"}"#).unwrap();
        assert_eq!(config.key_mode, KeyMode::NaturalRadius);
        assert_eq!(config.port, 8000);
        assert_eq!(config.database_path, PathBuf::from("data.db"));
    }
}
