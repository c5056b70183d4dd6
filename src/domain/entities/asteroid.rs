//! Near-Earth object entity.

use serde::{Deserialize, Serialize};

/// A near-Earth object from the NeoWs feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    pub name: String,
    pub hazardous: bool,
    /// Upper bound of the estimated diameter, in meters.
    pub diameter_meters: Option<f64>,
    /// Close-approach date as reported by the feed (`YYYY-MM-DD`).
    pub close_approach_date: String,
}
