use crate::core::{QueryParams, UpstreamApi};
use crate::utils::error::{ProxyError, Result};
use crate::utils::validation::{validate_endpoint_name, validate_url};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.loyverse.com/v1.0";

/// HTTP client for the Loyverse REST API.
///
/// One attempt per call: no timeout, retry or backoff is applied.
#[derive(Clone)]
pub struct LoyverseClient {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl LoyverseClient {
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Result<Self> {
        validate_url("api_base", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| ProxyError::InvalidConfigValueError {
            field: "api_base".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
            api_token: api_token.into(),
        })
    }

    /// Resolve `endpoint` under the base URL and append every defined parameter once.
    pub fn build_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url> {
        validate_endpoint_name(endpoint)?;

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProxyError::ConfigError {
                    message: format!("API base URL cannot hold a path: {}", self.base_url),
                })?;
            segments.pop_if_empty();
            segments.extend(endpoint.split('/'));
        }

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.defined() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

impl std::fmt::Debug for LoyverseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoyverseClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl UpstreamApi for LoyverseClient {
    async fn fetch_resource(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let url = self.build_url(endpoint, params)?;

        tracing::debug!("Making request to Loyverse API: {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Loyverse API response status for {}: {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Loyverse API error: {} - {}", status.as_u16(), body);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        Ok(data)
    }
}
