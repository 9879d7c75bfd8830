//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },
    #[error("invalid HOST value: {value:?}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build the listen config from the environment.
    ///
    /// Optional:
    /// - `HOST`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default `default_port`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but cannot be parsed.
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Ok(Self {
            host: parse_host(host.as_deref())?,
            port: parse_port(port.as_deref(), default_port)?,
        })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidHost { value: value.to_owned() }),
    }
}

fn parse_port(raw: Option<&str>, default: u16) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidPort { value: value.to_owned() }),
            Ok(port) => Ok(port),
        },
    }
}
