use crate::domain::model::QueryParams;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read access to the upstream POS API.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Fetch one resource endpoint and return its JSON body unmodified.
    async fn fetch_resource(&self, endpoint: &str, params: &QueryParams) -> Result<Value>;
}
