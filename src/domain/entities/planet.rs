//! Planet entities: raw upstream rows and the canonical API record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::classification::{Classification, classify};
use super::star::HostStar;

/// A row as delivered by the Exoplanet Archive: field name to optional scalar.
///
/// Only lives for the duration of one fetch cycle.
pub type RawExoplanetRecord = Map<String, Value>;

/// Normalized planet record served by the API.
///
/// `classification` is always derived from `radius_earth` and
/// `orbital_period_days` when the record is built; it is never read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPlanet {
    pub name: String,
    pub host_star: Option<String>,
    pub orbital_period_days: Option<f64>,
    pub radius_earth: Option<f64>,
    pub mass_earth: Option<f64>,
    pub discovery_method: Option<String>,
    pub discovery_year: Option<i32>,
    pub classification: Classification,
}

impl CanonicalPlanet {
    /// Creates a planet record and computes its classification.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        host_star: Option<String>,
        orbital_period_days: Option<f64>,
        radius_earth: Option<f64>,
        mass_earth: Option<f64>,
        discovery_method: Option<String>,
        discovery_year: Option<i32>,
    ) -> Self {
        Self {
            name,
            host_star,
            orbital_period_days,
            radius_earth,
            mass_earth,
            discovery_method,
            discovery_year,
            classification: classify(radius_earth, orbital_period_days),
        }
    }

    /// Case-insensitive substring match on the planet name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Returns true if the mass lies within the inclusive bounds.
    ///
    /// Planets without a known mass never match a bounded range.
    pub fn mass_within(&self, min: Option<f64>, max: Option<f64>) -> bool {
        if min.is_none() && max.is_none() {
            return true;
        }
        let Some(mass) = self.mass_earth else {
            return false;
        };
        min.is_none_or(|lo| mass >= lo) && max.is_none_or(|hi| mass <= hi)
    }
}

/// Everything derived from one upstream fetch, shared read-only between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetCatalog {
    pub planets: Vec<CanonicalPlanet>,
    pub host_stars: Vec<HostStar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(name: &str, mass: Option<f64>) -> CanonicalPlanet {
        CanonicalPlanet::new(name.to_string(), None, None, Some(1.0), mass, None, None)
    }

    #[test]
    fn test_new_computes_classification() {
        let p = CanonicalPlanet::new(
            "HD-2c".to_string(),
            Some("HD-2".to_string()),
            Some(3.0),
            Some(5.0),
            Some(300.0),
            Some("Transit".to_string()),
            Some(2010),
        );
        assert_eq!(p.classification, Classification::HotJupiter);
    }

    #[test]
    fn test_mass_does_not_affect_classification() {
        let light = planet("a", Some(0.1));
        let heavy = planet("b", Some(5000.0));
        assert_eq!(light.classification, heavy.classification);
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let p = planet("Kepler-22b", None);
        assert!(p.name_contains("kepler"));
        assert!(p.name_contains("22b"));
        assert!(!p.name_contains("trappist"));
    }

    #[test]
    fn test_mass_within_inclusive_bounds() {
        let p = planet("x", Some(10.0));
        assert!(p.mass_within(Some(10.0), Some(10.0)));
        assert!(p.mass_within(None, Some(10.0)));
        assert!(p.mass_within(Some(5.0), None));
        assert!(!p.mass_within(Some(10.5), None));
        assert!(!p.mass_within(None, Some(9.9)));
    }

    #[test]
    fn test_unknown_mass_only_matches_unbounded_range() {
        let p = planet("x", None);
        assert!(p.mass_within(None, None));
        assert!(!p.mass_within(Some(0.0), None));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(planet("Kepler-1b", None)).unwrap();
        assert_eq!(json["name"], "Kepler-1b");
        assert_eq!(json["classification"], "Rocky");
        assert!(json["mass_earth"].is_null());
    }
}
