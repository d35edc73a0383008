//! Sparse pruning
//!
//! Removes zero-valued fields from a [`Value`] tree, bottom-up:
//!
//! | Field value | Result |
//! |-------------|--------|
//! | `null` | removed |
//! | `false` | removed |
//! | `0` / `0.0` | removed |
//! | `""` | removed |
//! | `[]` | removed |
//! | non-empty array | object elements pruned, length kept |
//! | object | pruned, removed if nothing is left |
//!
//! The rules dispatch on the shape of each value only, so every kind's items
//! are pruned the same way.

use std::collections::BTreeMap;

use super::value::Value;

/// Prunes a tree. The root itself is never removed.
#[must_use]
pub fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_object(map)),
        Value::Array(items) => Value::Array(prune_elements(items)),
        other => other,
    }
}

fn prune_object(map: BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| prune_field(value).map(|value| (key, value)))
        .collect()
}

/// Elements are never dropped, even when they prune to `{}`.
fn prune_elements(items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Value::Object(prune_object(map)),
            other => other,
        })
        .collect()
}

fn prune_field(value: Value) -> Option<Value> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if is_zero(&n) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(Value::Array(prune_elements(items))),
        Value::Object(map) => {
            let pruned = prune_object(map);
            (!pruned.is_empty()).then_some(Value::Object(pruned))
        }
        other => Some(other),
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64() == Some(0.0)
}
