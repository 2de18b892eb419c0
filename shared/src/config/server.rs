//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0, // Use all CPU cores
            keep_alive: default_keep_alive(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `SERVER_HOST`, `SERVER_PORT`, `SERVER_WORKERS`, and
    /// `SERVER_KEEP_ALIVE`, falling back to defaults when a variable is
    /// absent or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let workers = std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.workers);
        let keep_alive = std::env::var("SERVER_KEEP_ALIVE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.keep_alive);

        Self {
            host,
            port,
            workers,
            keep_alive,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn new_overrides_host_and_port() {
        let config = ServerConfig::new("127.0.0.1", 8080);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.keep_alive, 75);
    }

    #[test]
    fn from_env_reads_workers_and_keep_alive() {
        std::env::set_var("SERVER_WORKERS", "4");
        std::env::set_var("SERVER_KEEP_ALIVE", "30");
        let config = ServerConfig::from_env();
        std::env::remove_var("SERVER_WORKERS");
        std::env::remove_var("SERVER_KEEP_ALIVE");
        assert_eq!(config.workers, 4);
        assert_eq!(config.keep_alive, 30);
    }
}
