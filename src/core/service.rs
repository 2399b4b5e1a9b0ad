use crate::core::aggregate::fetch_all;
use crate::core::transform::{modifier_groups, variant_summary};
use crate::core::{AggregateData, ModifierGroupsResponse, QueryParams, UpstreamApi, VariantSummary};
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// The operations exposed by the proxy, independent of the HTTP layer.
#[derive(Clone)]
pub struct LoyverseService {
    api: Arc<dyn UpstreamApi>,
}

impl LoyverseService {
    pub fn new(api: Arc<dyn UpstreamApi>) -> Self {
        Self { api }
    }

    pub async fn items(&self, params: &QueryParams) -> Result<Value> {
        tracing::info!("Fetching Loyverse items");
        self.api.fetch_resource("items", params).await
    }

    pub async fn modifiers(&self) -> Result<Value> {
        self.api.fetch_resource("modifiers", &QueryParams::new()).await
    }

    pub async fn modifier_groups(&self) -> Result<ModifierGroupsResponse> {
        let modifiers = self.modifiers().await?;
        let groups = modifier_groups(&modifiers);
        tracing::debug!("Derived {} modifier groups", groups.len());
        Ok(ModifierGroupsResponse {
            modifier_groups: groups,
        })
    }

    pub async fn variants(&self) -> Result<VariantSummary> {
        let items = self.api.fetch_resource("items", &QueryParams::new()).await?;
        let summary = variant_summary(&items)?;
        tracing::debug!(
            "{} of {} items have variants",
            summary.items_with_variants_count,
            summary.total_items
        );
        Ok(summary)
    }

    pub async fn data(&self) -> AggregateData {
        tracing::info!("Fetching comprehensive Loyverse data");
        fetch_all(self.api.as_ref()).await
    }

    /// A single trailing `/` is ignored, so `modifiers/` proxies `modifiers`.
    pub async fn passthrough(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let endpoint = endpoint.strip_suffix('/').unwrap_or(endpoint);
        tracing::info!("Proxying Loyverse endpoint '{}'", endpoint);
        self.api.fetch_resource(endpoint, params).await
    }
}
