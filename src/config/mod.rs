//! Process configuration

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server bind configuration, read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (`ORDERS_HOST`, default `0.0.0.0`)
    pub host: String,
    /// Bind port (`ORDERS_PORT`, default `8080`)
    pub port: u16,
}

impl ServerConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("ORDERS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("ORDERS_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid ORDERS_PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// The address to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
