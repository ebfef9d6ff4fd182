//! HTTP client for the BrasilAPI CVM brokers endpoint.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{types::Broker, Error};

const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";
const BROKERS_PATH: &str = "/api/cvm/corretoras/v1";

/// HTTP client for the BrasilAPI CVM endpoints.
///
/// Holds no connection state between calls: each request builds a fresh
/// `reqwest::Client`, so every call hits the network.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://brasilapi.com.br`.
    base_api_url: String,
    /// Per-request timeout. `None` leaves the transport default (no timeout).
    timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production BrasilAPI.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Sets a timeout applied to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let mut builder = reqwest::Client::builder().user_agent(user_agent());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e.to_string())
        })?;

        tracing::debug!(%url, "fetching upstream resource");
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Fetches every broker registered with the CVM.
    ///
    /// The endpoint is not paginated upstream; the whole list comes back in
    /// one array, in upstream order.
    pub async fn get_brokers(&self) -> Result<Vec<Broker>, Error> {
        self.get::<Vec<Broker>>(BROKERS_PATH).await
    }
}

fn user_agent() -> String {
    format!("corretoras/{}", env!("CARGO_PKG_VERSION"))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
