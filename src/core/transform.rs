//! Reshaping of upstream payloads into the derived views served by the proxy.

use crate::core::{ModifierGroup, VariantSummary};
use crate::utils::error::{ProxyError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Collapse the upstream `modifiers` list into one group per distinct name.
///
/// The first modifier carrying a name wins and upstream order is preserved.
/// Any truthy `name` counts: non-empty strings, non-zero numbers, `true`,
/// arrays and objects. Names compare by JSON value, so `1` and `"1"` are
/// different groups. A payload without a `modifiers` array produces no groups.
pub fn modifier_groups(payload: &Value) -> Vec<ModifierGroup> {
    let Some(modifiers) = payload.get("modifiers").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for modifier in modifiers {
        let Some(name) = modifier.get("name").filter(|name| is_truthy(name)) else {
            continue;
        };
        if !seen.insert(name.to_string()) {
            continue;
        }

        groups.push(ModifierGroup {
            id: modifier.get("id").cloned(),
            group_name: name.clone(),
            created_at: modifier.get("created_at").cloned(),
            updated_at: modifier.get("updated_at").cloned(),
        });
    }

    groups
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Keep the items that have more than one variant.
pub fn variant_summary(payload: &Value) -> Result<VariantSummary> {
    let items = payload
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| ProxyError::ProcessingError {
            message: "Loyverse items response has no 'items' array".to_string(),
        })?;

    let items_with_variants: Vec<Value> = items
        .iter()
        .filter(|item| {
            item.get("variants")
                .and_then(Value::as_array)
                .is_some_and(|variants| variants.len() > 1)
        })
        .cloned()
        .collect();

    Ok(VariantSummary {
        total_items: items.len(),
        items_with_variants_count: items_with_variants.len(),
        items_with_variants,
    })
}
