use std::fmt;
use std::future::Future;
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{FetchError, Result};
use crate::models::ListResponse;

/// Result limit attached to every request
pub const MAX_RESULTS: &str = "50";

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// A relative API path with its query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    params: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Value of the first parameter named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Source of API responses.
///
/// [`ApiClient`] is the production implementation; anything that can answer
/// an [`Endpoint`] with JSON can stand in for it.
pub trait Fetch: Send + Sync {
    fn fetch_resource(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = std::result::Result<Value, FetchError>> + Send;

    /// Fetch a list endpoint and decode its `items`
    fn fetch_items<T>(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = std::result::Result<Vec<T>, FetchError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            let body = self.fetch_resource(endpoint).await?;
            let response: ListResponse<T> = serde_json::from_value(body)?;
            Ok(response.items)
        }
    }
}

/// Authenticated gateway to the upstream video-data API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("streamwave/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Fetch for ApiClient {
    async fn fetch_resource(&self, endpoint: &Endpoint) -> std::result::Result<Value, FetchError> {
        let url = format!("{}/{}", self.config.base_url, endpoint.path());
        tracing::debug!(%endpoint, "GET");

        let response = self
            .client
            .get(&url)
            .query(endpoint.params())
            .query(&[("maxResults", MAX_RESULTS)])
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_HOST_HEADER, &self.config.api_host)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%endpoint, %status, "request rejected");
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
