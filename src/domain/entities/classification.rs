//! Physical classification of planets by size and orbit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radius below which a planet is considered rocky, in Earth radii.
pub const ROCKY_MAX_RADIUS: f64 = 1.25;
/// Upper (inclusive) radius bound for super-Earths.
pub const SUPER_EARTH_MAX_RADIUS: f64 = 2.0;
/// Upper (inclusive) radius bound for mini-Neptunes.
pub const MINI_NEPTUNE_MAX_RADIUS: f64 = 4.0;
/// Giants orbiting faster than this many days are hot Jupiters.
pub const HOT_JUPITER_MAX_PERIOD_DAYS: f64 = 10.0;

/// Planet category derived from radius and orbital period.
///
/// Serialized with the human-readable labels (`"Super Earth"`, `"Hot Jupiter"`, ...).
/// The declaration order is also the ordering used in category histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    Rocky,
    #[serde(rename = "Super Earth")]
    SuperEarth,
    #[serde(rename = "Mini Neptune")]
    MiniNeptune,
    #[serde(rename = "Hot Jupiter")]
    HotJupiter,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    Unknown,
}

impl Classification {
    /// Returns the display label used in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::SuperEarth => "Super Earth",
            Self::MiniNeptune => "Mini Neptune",
            Self::HotJupiter => "Hot Jupiter",
            Self::GasGiant => "Gas Giant",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a planet from its radius (Earth radii) and orbital period (days).
///
/// Rules are evaluated in order and the first match wins:
///
/// | Condition                               | Result         |
/// |-----------------------------------------|----------------|
/// | radius absent or not finite             | `Unknown`      |
/// | radius < 1.25                           | `Rocky`        |
/// | 1.25 <= radius <= 2                     | `Super Earth`  |
/// | 2 < radius <= 4                         | `Mini Neptune` |
/// | radius > 4 and period present and < 10  | `Hot Jupiter`  |
/// | radius > 4                              | `Gas Giant`    |
///
/// Mass is deliberately not an input.
pub fn classify(radius_earth: Option<f64>, orbital_period_days: Option<f64>) -> Classification {
    let Some(radius) = radius_earth.filter(|r| r.is_finite()) else {
        return Classification::Unknown;
    };

    if radius < ROCKY_MAX_RADIUS {
        Classification::Rocky
    } else if radius <= SUPER_EARTH_MAX_RADIUS {
        Classification::SuperEarth
    } else if radius <= MINI_NEPTUNE_MAX_RADIUS {
        Classification::MiniNeptune
    } else if orbital_period_days.is_some_and(|p| p < HOT_JUPITER_MAX_PERIOD_DAYS) {
        Classification::HotJupiter
    } else {
        Classification::GasGiant
    }
}
