//! Configuration types for the unit converter server.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Server settings loaded from a YAML file.
///
/// Every field has a default, so a partial file (or no file at all) is
/// valid. The conversion table itself is fixed at build time and is not
/// part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The interface the server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Renders the `host:port` address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
