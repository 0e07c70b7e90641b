use std::collections::BTreeMap;

use serde::Deserialize;

/// Server-computed aggregation for one calendar month, always whole-account.
/// Replaced wholesale on every successful fetch, never merged with a prior
/// summary. Fields default so a sparse response still displays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub per_category: BTreeMap<String, f64>,
}
