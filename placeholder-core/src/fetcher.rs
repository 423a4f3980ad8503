use std::time::Instant;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ConfigError, FetchError};
use crate::models::{Dataset, ResourceKind};

/// Issues one GET per request against the API, no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: Url,
}

impl Fetcher {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Builds a client with the configured timeout and user agent.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = api.base_url()?;
        let client = ClientBuilder::new()
            .timeout(api.request_timeout())
            .user_agent(concat!("placeholder-viewer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{kind}?_limit={limit}`
    pub fn endpoint(&self, kind: ResourceKind, limit: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kind.path());
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("_limit", &limit.to_string());
        url
    }

    pub async fn fetch(&self, kind: ResourceKind, limit: u32) -> Result<Dataset, FetchError> {
        let started = Instant::now();
        let result = self.fetch_inner(kind, limit).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(dataset) => {
                info!(%kind, limit, items = dataset.len(), elapsed_ms, "fetch completed");
            }
            Err(err) => {
                warn!(%kind, limit, elapsed_ms, error = %err, "fetch failed");
            }
        }
        result
    }

    async fn fetch_inner(&self, kind: ResourceKind, limit: u32) -> Result<Dataset, FetchError> {
        let response = self.client.get(self.endpoint(kind, limit)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { kind, status });
        }
        let bytes = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|source| FetchError::Parse { kind, source })?;
        decode(kind, value)
    }
}

/// Validates a parsed JSON document against the schema of `kind`.
pub fn decode(kind: ResourceKind, value: serde_json::Value) -> Result<Dataset, FetchError> {
    fn typed<T: DeserializeOwned>(
        kind: ResourceKind,
        value: serde_json::Value,
    ) -> Result<Vec<T>, FetchError> {
        serde_json::from_value(value).map_err(|source| FetchError::Schema { kind, source })
    }

    Ok(match kind {
        ResourceKind::Posts => Dataset::Posts(typed(kind, value)?),
        ResourceKind::Comments => Dataset::Comments(typed(kind, value)?),
        ResourceKind::Albums => Dataset::Albums(typed(kind, value)?),
        ResourceKind::Photos => Dataset::Photos(typed(kind, value)?),
    })
}
