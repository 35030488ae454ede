//! Startup configuration: which backend to use and where the modeling
//! service listens.
//!
//! The document is read once; a missing or malformed file is an
//! [`Error::Config`] and the process is expected to stop.
//!
//! ```json
//! {
//!   "backend": "remote",
//!   "server": { "address": "127.0.0.1", "port": 50051 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const CONFIG_FILE: &str = "config.json";
const CONFIG_ENV: &str = "ATELIER_CONFIG";

fn default_backend() -> String {
    "remote".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend mode, resolved by [`crate::backend::Backend`].
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Target of the remote gateway.
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// `http://{address}:{port}`. The address is a bare host: no scheme, no whitespace.
    pub fn base_url(&self) -> Result<Url> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(Error::Config("server.address can't be blank".to_string()));
        }
        if address.contains("://") || self.address.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "server.address must be a bare host, got '{}'",
                self.address
            )));
        }

        Url::parse(&format!("http://{}", self.socket_address()))
            .map_err(|e| Error::Config(format!("Invalid server address '{}': {}", self.address, e)))
    }
}

impl Config {
    /// Read and validate the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading configuration");

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// `$ATELIER_CONFIG`, falling back to `config.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE))
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("server.port must be non-zero".to_string()));
        }
        self.server.base_url()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_server_section() {
        let config = Config::from_json(
            r#"{ "backend": "in_memory", "server": { "address": "localhost", "port": 50051 } }"#,
        )
        .unwrap();

        assert_eq!(config.backend, "in_memory");
        assert_eq!(config.server.socket_address(), "localhost:50051");
    }

    #[test]
    fn backend_defaults_to_remote() {
        let config =
            Config::from_json(r#"{ "server": { "address": "10.0.0.2", "port": 9000 } }"#).unwrap();
        assert_eq!(config.backend, "remote");
    }

    #[test]
    fn rejects_missing_server_section() {
        let err = Config::from_json(r#"{ "backend": "remote" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_port_out_of_range() {
        let err = Config::from_json(r#"{ "server": { "address": "localhost", "port": 70000 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_addresses_that_are_not_bare_hosts() {
        for address in ["http://localhost", "not a host", "local host", "[::1"] {
            let json = format!(r#"{{ "server": {{ "address": "{}", "port": 50051 }} }}"#, address);
            let err = Config::from_json(&json).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "accepted {address}");
        }
    }

    #[test]
    fn builds_the_base_url_from_address_and_port() {
        let server = ServerConfig {
            address: "10.0.0.2".to_string(),
            port: 9000,
        };
        assert_eq!(server.base_url().unwrap().as_str(), "http://10.0.0.2:9000/");
    }
}
