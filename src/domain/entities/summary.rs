//! Aggregate statistics over a planet collection.

use serde::Serialize;
use std::collections::BTreeMap;

use super::classification::Classification;

/// Label reported when no record carries a discovery method.
pub const UNKNOWN_METHOD: &str = "Unknown";

/// Summary view computed per request; never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total: usize,
    /// Count per classification, `Unknown` included.
    pub categories: BTreeMap<Classification, usize>,
    /// Mean radius in Earth radii, two decimal places; null when no radius is known.
    pub average_radius: Option<f64>,
    pub most_common_method: String,
    /// Most recent discovery year; null when no record has a year.
    pub latest_year: Option<i32>,
}

impl SummaryStatistics {
    /// Statistics for an empty collection.
    pub fn empty() -> Self {
        Self {
            total: 0,
            categories: BTreeMap::new(),
            average_radius: None,
            most_common_method: UNKNOWN_METHOD.to_string(),
            latest_year: None,
        }
    }
}
