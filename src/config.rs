use std::env;

use anyhow::{format_err, Result};

pub const DEFAULT_PORT: u32 = 3000;
pub const DEFAULT_HOST: &str = "localhost";
pub const MIN_PORT: u32 = 1;
pub const MAX_PORT: u32 = 65535;

/// Listener settings. Unset fields fall back to [`DEFAULT_PORT`] / [`DEFAULT_HOST`];
/// values are validated when the server is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerOptions {
    pub port: Option<u32>,
    pub host: Option<String>,
}

impl ServerOptions {
    pub fn new(port: u32, host: impl Into<String>) -> Self {
        Self {
            port: Some(port),
            host: Some(host.into()),
        }
    }

    pub fn effective_port(&self) -> u32 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn effective_host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Reads `PORT` and `HOST`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var("PORT").ok(), env::var("HOST").ok())
    }

    pub fn from_vars(port: Option<String>, host: Option<String>) -> Result<Self> {
        let port = port.map(|raw| parse_port(&raw)).transpose()?;
        let host = host.filter(|h| !h.is_empty());
        Ok(Self { port, host })
    }
}

fn parse_port(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|p| (MIN_PORT as i64..=MAX_PORT as i64).contains(p))
        .map(|p| p as u32)
        .ok_or_else(|| format_err!("Invalid PORT environment variable: {raw}"))
}
