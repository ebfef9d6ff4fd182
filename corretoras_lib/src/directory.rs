//! Broker lookups used by the HTTP layer.

use std::time::Duration;

use brasilapi_cvm::types::Broker;
use brasilapi_cvm::Client;

use crate::error::CorretorasError;
use crate::pagination::{paginate, PageRequest, Paginated};
use crate::projection::{project, BrokerDisplay};

/// Facade over the BrasilAPI client exposing the two views the server
/// renders.
///
/// Nothing is cached: every call performs exactly one upstream request.
#[derive(Clone, Debug, Default)]
pub struct BrokerDirectory {
    inner: Client,
}

impl BrokerDirectory {
    /// Creates a directory backed by the production API.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a directory with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    /// Builds a directory from operator-supplied settings.
    ///
    /// The base URL must be an absolute `http` or `https` URL and the
    /// timeout, when given, must be non-zero.
    pub fn from_settings(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, CorretorasError> {
        let parsed = url::Url::parse(base_url).map_err(|e| {
            CorretorasError::InvalidInput(format!("invalid upstream URL '{}': {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CorretorasError::InvalidInput(format!(
                "upstream URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let mut client = Client::with_base_url(base_url);
        if let Some(timeout) = timeout {
            if timeout.is_zero() {
                return Err(CorretorasError::InvalidInput(
                    "upstream timeout must be greater than zero".into(),
                ));
            }
            client = client.with_timeout(timeout);
        }
        Ok(Self { inner: client })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Fetches the full, unprojected broker list.
    pub async fn all_brokers(&self) -> Result<Vec<Broker>, CorretorasError> {
        let brokers = self.inner.get_brokers().await?;
        tracing::debug!(count = brokers.len(), "fetched brokers");
        Ok(brokers)
    }

    /// Fetches every broker and projects it for display.
    pub async fn display_list(&self) -> Result<Vec<BrokerDisplay>, CorretorasError> {
        let brokers = self.all_brokers().await?;
        Ok(project(&brokers))
    }

    /// Fetches every broker and returns the requested page of raw records.
    pub async fn page(&self, request: PageRequest) -> Result<Paginated<Broker>, CorretorasError> {
        let brokers = self.all_brokers().await?;
        Ok(paginate(brokers, request))
    }
}
