//! Spec model: a named, ordered bag of technical parameters.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A spec parameter value. Stored snapshots may hold either JSON strings or
/// JSON numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SpecValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        SpecValue::Text(value)
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        SpecValue::Number(value.into())
    }
}

/// A named set of technical parameters referenced by process steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecDetails {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Parameter name to value; insertion order is display order
    #[serde(default)]
    pub items: IndexMap<String, SpecValue>,
}

impl SpecDetails {
    /// Creates a spec from `(key, value)` pairs, keeping their order.
    pub fn new<K, V, I>(id: impl Into<String>, title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SpecValue>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Items rendered as `k1: v1; k2: v2` in stored order.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// First `Parameter N` key (N starting at 1) not already present.
    pub fn next_parameter_key(&self) -> String {
        (1..)
            .map(|i| format!("Parameter {i}"))
            .find(|key| !self.items.contains_key(key))
            .unwrap_or_default()
    }
}
