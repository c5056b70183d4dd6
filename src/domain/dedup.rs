//! Collapsing of repeated upstream rows.
//!
//! The archive may return several rows for the same planet name. The first
//! row seen for a name wins and the relative order of first-seen names is kept.

use std::collections::HashSet;
use std::hash::Hash;

use super::entities::RawExoplanetRecord;
use super::normalizer::fields;

/// Keeps the first item for each key, in input order.
///
/// Items for which `key` returns `None` are dropped.
pub fn dedupe_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> Option<K>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match key(item) {
            Some(k) => seen.insert(k),
            None => false,
        })
        .collect()
}

/// Deduplicates raw archive rows by planet name (case-sensitive).
///
/// Rows with an absent or blank name cannot establish identity and are dropped.
pub fn dedupe(records: Vec<RawExoplanetRecord>) -> Vec<RawExoplanetRecord> {
    dedupe_by(records, |record| record_name(record).map(str::to_owned))
}

/// Returns the identity name of a raw row, if it has a usable one.
pub(crate) fn record_name(record: &RawExoplanetRecord) -> Option<&str> {
    record
        .get(fields::NAME)
        .and_then(|v| v.as_str())
        .filter(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> RawExoplanetRecord {
        value.as_object().cloned().unwrap()
    }

    fn names(records: &[RawExoplanetRecord]) -> Vec<&str> {
        records.iter().filter_map(record_name).collect()
    }

    #[test]
    fn test_first_seen_wins_and_order_is_kept() {
        let input = vec![
            row(json!({"pl_name": "b", "pl_rade": 1.0})),
            row(json!({"pl_name": "a"})),
            row(json!({"pl_name": "b", "pl_rade": 9.0})),
            row(json!({"pl_name": "c"})),
            row(json!({"pl_name": "a"})),
        ];

        let out = dedupe(input);

        assert_eq!(names(&out), vec!["b", "a", "c"]);
        assert_eq!(out[0]["pl_rade"], json!(1.0));
    }

    #[test]
    fn test_is_idempotent() {
        let input = vec![
            row(json!({"pl_name": "x"})),
            row(json!({"pl_name": "y"})),
            row(json!({"pl_name": "x"})),
        ];

        let once = dedupe(input);
        let twice = dedupe(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let input = vec![
            row(json!({"pl_name": "Kepler-1b"})),
            row(json!({"pl_name": "kepler-1b"})),
        ];

        assert_eq!(dedupe(input).len(), 2);
    }

    #[test]
    fn test_drops_rows_without_identity() {
        let input = vec![
            row(json!({"pl_rade": 1.0})),
            row(json!({"pl_name": null})),
            row(json!({"pl_name": ""})),
            row(json!({"pl_name": "   "})),
            row(json!({"pl_name": 42})),
            row(json!({"pl_name": "ok"})),
        ];

        assert_eq!(names(&dedupe(input)), vec!["ok"]);
    }

    #[test]
    fn test_dedupe_by_generic_key() {
        let out = dedupe_by(vec![3, 1, 3, 2, 1], |n| Some(*n));
        assert_eq!(out, vec![3, 1, 2]);
    }
}
