use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Ordered query parameters for an upstream call.
///
/// Entries without a value are kept so callers can pass optional filters
/// straight through, but they are never sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((key.into(), Some(value.to_string())));
        self
    }

    pub fn with_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.pairs.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Pairs that carry a value, in insertion order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

/// First modifier seen for a given name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Usually a string; other JSON values are carried over untouched.
    pub group_name: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierGroupsResponse {
    pub modifier_groups: Vec<ModifierGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSummary {
    pub items_with_variants: Vec<Value>,
    pub total_items: usize,
    pub items_with_variants_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointError {
    pub endpoint: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateData {
    pub items: Value,
    pub categories: Value,
    pub modifiers: Value,
    pub stores: Value,
    pub taxes: Value,
    pub errors: Vec<EndpointError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_skip_undefined_values() {
        let params = QueryParams::new()
            .with("limit", 250)
            .with_opt::<String>("cursor", None)
            .with_opt("store_id", Some("s-1"))
            .with("show_deleted", false);

        let defined: Vec<_> = params.defined().collect();
        assert_eq!(
            defined,
            vec![("limit", "250"), ("store_id", "s-1"), ("show_deleted", "false")]
        );
        assert!(!params.is_empty());
    }

    #[test]
    fn test_query_params_with_only_undefined_values_is_empty() {
        let params = QueryParams::new().with_opt::<u32>("limit", None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_modifier_group_omits_absent_fields() {
        let group = ModifierGroup {
            id: Some(Value::from(1)),
            group_name: Value::from("Size"),
            created_at: None,
            updated_at: Some(Value::Null),
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "group_name": "Size", "updated_at": null})
        );
    }
}
