//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3001;

/// Bind configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub bind_address: IpAddr,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `PORT` from the environment, keeping defaults otherwise.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            ..Self::default()
        }
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3001");
    }

    // Single test so concurrent tests never race on the PORT variable.
    #[test]
    fn test_port_from_env() {
        std::env::set_var("PORT", "8080");
        assert_eq!(ServerConfig::from_env().port, 8080);

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(ServerConfig::from_env().port, DEFAULT_PORT);

        std::env::remove_var("PORT");
        assert_eq!(ServerConfig::from_env().port, DEFAULT_PORT);
    }
}
