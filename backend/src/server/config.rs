//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use thiserror::Error;
use url::Url;

use ticket_gateway::config::{GatewaySettings, SettingsError};

/// Errors raised while turning settings into a server configuration.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("bind address {host}:{port} did not resolve: {reason}")]
    BindAddress {
        host: String,
        port: u16,
        reason: String,
    },
}

impl From<ServerConfigError> for std::io::Error {
    fn from(error: ServerConfigError) -> Self {
        std::io::Error::other(error.to_string())
    }
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) partner_base_url: Url,
    pub(crate) core_base_url: Url,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) payment_deadline: Option<Duration>,
}

impl ServerConfig {
    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl TryFrom<&GatewaySettings> for ServerConfig {
    type Error = ServerConfigError;

    fn try_from(settings: &GatewaySettings) -> Result<Self, Self::Error> {
        let (host, port) = (settings.bind_host(), settings.bind_port());
        let bind_addr = (host, port)
            .to_socket_addrs()
            .map_err(|err| err.to_string())
            .and_then(|mut addrs| {
                addrs
                    .next()
                    .ok_or_else(|| "no addresses returned".to_owned())
            })
            .map_err(|reason| ServerConfigError::BindAddress {
                host: host.to_owned(),
                port,
                reason,
            })?;

        Ok(Self {
            bind_addr,
            partner_base_url: settings.partner_base_url()?,
            core_base_url: settings.core_base_url()?,
            request_timeout: settings.request_timeout()?,
            payment_deadline: settings.payment_deadline()?,
        })
    }
}
