use crate::core::{AggregateData, EndpointError, QueryParams, UpstreamApi};
use crate::utils::error::Result;
use serde_json::{json, Value};

/// Resources fetched by [`fetch_all`], in the order errors are reported.
pub const AGGREGATE_ENDPOINTS: [&str; 5] = ["items", "categories", "modifiers", "stores", "taxes"];

/// Fetch every aggregate resource concurrently and wait for all of them to settle.
///
/// A failed call never aborts the others: its slot falls back to an empty
/// collection (`{"<endpoint>": []}`) and the failure is recorded in `errors`.
pub async fn fetch_all(api: &dyn UpstreamApi) -> AggregateData {
    let params = QueryParams::new();

    let (items, categories, modifiers, stores, taxes) = tokio::join!(
        api.fetch_resource("items", &params),
        api.fetch_resource("categories", &params),
        api.fetch_resource("modifiers", &params),
        api.fetch_resource("stores", &params),
        api.fetch_resource("taxes", &params),
    );

    let mut errors = Vec::new();
    let items = settle("items", items, &mut errors);
    let categories = settle("categories", categories, &mut errors);
    let modifiers = settle("modifiers", modifiers, &mut errors);
    let stores = settle("stores", stores, &mut errors);
    let taxes = settle("taxes", taxes, &mut errors);

    if errors.is_empty() {
        tracing::info!("Aggregate Loyverse data fetched successfully");
    } else {
        tracing::warn!(
            "Aggregate Loyverse data fetched with {} of {} endpoints failing",
            errors.len(),
            AGGREGATE_ENDPOINTS.len()
        );
    }

    AggregateData {
        items,
        categories,
        modifiers,
        stores,
        taxes,
        errors,
    }
}

fn settle(endpoint: &str, result: Result<Value>, errors: &mut Vec<EndpointError>) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Loyverse endpoint '{}' failed during aggregation: {}", endpoint, e);
            errors.push(EndpointError {
                endpoint: endpoint.to_string(),
                error: e.to_string(),
            });
            json!({ endpoint: [] })
        }
    }
}
