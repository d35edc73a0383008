//! Generic value tree used for structured output
//!
//! Domain types are converted into a [`Value`] exactly once per output path
//! (see [`Value::from_serializable`]); pruning and encoding only ever see
//! this tree.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::definition::DefinitionError;

/// Decoded configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer or float
    Number(serde_json::Number),
    /// String
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Object with sorted keys
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Converts any serializable domain value into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Encode`] if `value` cannot be represented,
    /// e.g. a map with non-string keys.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, DefinitionError> {
        serde_json::to_value(value)
            .map(Self::from)
            .map_err(|e| DefinitionError::Encode(e.to_string()))
    }

    /// Returns the object map, if this is an object
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a key of an object; `None` for other shapes or missing keys
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_shape() {
        let value = Value::from(json!({"a": [1, "x", null], "b": {"c": true}}));
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a, [Value::from(1_i64), Value::from("x"), Value::Null]);
        assert_eq!(value.get("b").and_then(|b| b.get("c")), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_from_serializable_struct() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Sample {
            deploy_name: String,
            deploy_replicas: i64,
        }

        let value = Value::from_serializable(&Sample {
            deploy_name: "tp1-go-demo".to_string(),
            deploy_replicas: 2,
        })
        .unwrap();
        assert_eq!(value.get("deployName"), Some(&Value::from("tp1-go-demo")));
        assert_eq!(value.get("deployReplicas"), Some(&Value::from(2_i64)));
    }

    #[test]
    fn test_serialize_to_json_matches_source() {
        let source = json!({"kind": "list", "defs": [{"items": [1.5, false]}]});
        let value = Value::from(source.clone());
        assert_eq!(serde_json::to_value(&value).unwrap(), source);
    }

    #[test]
    fn test_serialize_to_yaml() {
        let value = Value::from(json!({"kind": "list", "count": 2}));
        let yaml = serde_yaml::to_string(&value).unwrap();
        assert_eq!(yaml, "count: 2\nkind: list\n");
    }

    #[test]
    fn test_get_on_non_object() {
        assert_eq!(Value::from("x").get("a"), None);
        assert_eq!(Value::Null.as_array(), None);
    }
}
