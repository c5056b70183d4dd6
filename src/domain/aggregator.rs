//! Summary statistics over normalized planets.

use std::collections::{BTreeMap, HashMap};

use super::entities::{CanonicalPlanet, SummaryStatistics, UNKNOWN_METHOD};

/// Computes summary statistics. Total: an empty slice yields zero counts and nulls.
pub fn summarize(planets: &[CanonicalPlanet]) -> SummaryStatistics {
    if planets.is_empty() {
        return SummaryStatistics::empty();
    }

    let mut categories = BTreeMap::new();
    for planet in planets {
        *categories.entry(planet.classification).or_insert(0) += 1;
    }

    let radii: Vec<f64> = planets.iter().filter_map(|p| p.radius_earth).collect();
    let average_radius = if radii.is_empty() {
        None
    } else {
        Some(round2(radii.iter().sum::<f64>() / radii.len() as f64))
    };

    let latest_year = planets.iter().filter_map(|p| p.discovery_year).max();

    SummaryStatistics {
        total: planets.len(),
        categories,
        average_radius,
        most_common_method: most_common_method(planets)
            .unwrap_or(UNKNOWN_METHOD)
            .to_string(),
        latest_year,
    }
}

/// Highest-count discovery method; ties go to the earliest first occurrence.
fn most_common_method(planets: &[CanonicalPlanet]) -> Option<&str> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for method in planets.iter().filter_map(|p| p.discovery_method.as_deref()) {
        let count = counts.entry(method).or_insert(0);
        if *count == 0 {
            order.push(method);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for method in order {
        let count = counts[method];
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((method, count));
        }
    }
    best.map(|(method, _)| method)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
