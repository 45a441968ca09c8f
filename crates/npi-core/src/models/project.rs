//! Project metadata model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Singleton project metadata shown in the overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    /// Project code
    pub id: String,

    /// Number of units to ship
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u64,

    /// Board dimensions, free text
    #[serde(default)]
    pub pcb_size: String,

    /// Date string; empty means no target ship date
    #[serde(default)]
    pub target_ship_date: String,
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self {
            id: "Enter Project ID".to_string(),
            quantity: 0,
            pcb_size: "0 x 0 x 0 mm".to_string(),
            target_ship_date: String::new(),
        }
    }
}

impl ProjectDetails {
    /// The target ship date, if one is set.
    pub fn target_ship_date(&self) -> Option<&str> {
        Some(self.target_ship_date.as_str()).filter(|d| !d.trim().is_empty())
    }
}

/// Lenient quantity parsing: anything that is not a finite, non-negative
/// number counts as zero; fractions are truncated.
pub fn parse_quantity(value: &str) -> u64 {
    value.trim().parse::<f64>().map_or(0, truncate_quantity)
}

fn truncate_quantity(n: f64) -> u64 {
    if n.is_finite() && n >= 0.0 {
        n.trunc() as u64
    } else {
        0
    }
}

/// Accepts any stored number or numeric string, with the same rules as
/// [`parse_quantity`].
fn lenient_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .unwrap_or_else(|| n.as_f64().map_or(0, truncate_quantity)),
        Value::String(s) => parse_quantity(&s),
        _ => 0,
    })
}
