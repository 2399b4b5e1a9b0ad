use super::error::ApiError;
use super::state::AppState;
use crate::core::{AggregateData, ModifierGroupsResponse, QueryParams, VariantSummary};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn items(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> ApiResult<Value> {
    state
        .service
        .items(&QueryParams::from(query))
        .await
        .map(Json)
        .map_err(|e| state.error("Failed to fetch items from Loyverse API", e))
}

pub async fn modifiers(State(state): State<AppState>) -> ApiResult<Value> {
    state
        .service
        .modifiers()
        .await
        .map(Json)
        .map_err(|e| state.error("Failed to fetch modifiers from Loyverse API", e))
}

pub async fn modifier_groups(State(state): State<AppState>) -> ApiResult<ModifierGroupsResponse> {
    state
        .service
        .modifier_groups()
        .await
        .map(Json)
        .map_err(|e| state.error("Failed to fetch modifier groups from Loyverse API", e))
}

pub async fn variants(State(state): State<AppState>) -> ApiResult<VariantSummary> {
    state
        .service
        .variants()
        .await
        .map(Json)
        .map_err(|e| state.error("Failed to fetch variants from Loyverse API", e))
}

/// Always 200: per-endpoint failures are reported inside the body.
pub async fn data(State(state): State<AppState>) -> Json<AggregateData> {
    Json(state.service.data().await)
}

pub async fn passthrough(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> ApiResult<Value> {
    state
        .service
        .passthrough(&endpoint, &QueryParams::from(query))
        .await
        .map(Json)
        .map_err(|e| state.error("Failed to fetch data from Loyverse API", e))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
