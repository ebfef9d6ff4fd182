//! Command-line flags and the server configuration derived from them.
//!
//! Every flag has an environment fallback, so a `.env` file loaded at
//! startup can configure the server as well.

use std::time::Duration;

use clap::Parser;
use corretoras_lib::{BrokerDirectory, CorretorasError};

#[derive(Parser, Debug)]
#[command(name = "corretoras")]
#[command(about = "Serve the CVM broker list from BrasilAPI as HTML and paginated JSON")]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "CORRETORAS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CORRETORAS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the BrasilAPI instance to fetch brokers from
    #[arg(
        long,
        env = "CORRETORAS_UPSTREAM_URL",
        default_value = "https://brasilapi.com.br"
    )]
    pub upstream_url: String,

    /// Upstream request timeout in seconds (no timeout when unset)
    #[arg(long, env = "CORRETORAS_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Upstream base URL.
    pub upstream_url: String,
    /// Optional upstream request timeout.
    pub upstream_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            upstream_url: "https://brasilapi.com.br".into(),
            upstream_timeout: None,
        }
    }
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            upstream_url: cli.upstream_url,
            upstream_timeout: cli.upstream_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl ServerConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the broker directory, validating the upstream settings.
    pub fn directory(&self) -> Result<BrokerDirectory, CorretorasError> {
        BrokerDirectory::from_settings(&self.upstream_url, self.upstream_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.directory().is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "corretoras",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--upstream-url",
            "http://localhost:3000",
            "--upstream-timeout-secs",
            "15",
        ])
        .unwrap();
        let config = ServerConfig::from(cli);
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.upstream_url, "http://localhost:3000");
        assert_eq!(config.upstream_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig {
            upstream_timeout: Some(Duration::ZERO),
            ..ServerConfig::default()
        };
        assert!(config.directory().is_err());
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Cli::try_parse_from(["corretoras", "--port", "99999"]).is_err());
    }
}
