//! Host star entity extracted from planet rows.

use serde::{Deserialize, Serialize};

/// A star that hosts at least one known exoplanet.
///
/// Stellar parameters are only available from the live archive; the SQLite
/// mirror stores host names alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostStar {
    pub name: String,
    /// Stellar mass in solar masses.
    pub mass_solar: Option<f64>,
    /// Stellar radius in solar radii.
    pub radius_solar: Option<f64>,
    /// Effective temperature in kelvin.
    pub temperature_k: Option<f64>,
}

impl HostStar {
    /// Creates a host star with no stellar parameters.
    pub fn named(name: String) -> Self {
        Self {
            name,
            mass_solar: None,
            radius_solar: None,
            temperature_k: None,
        }
    }
}
