//! Query parameters for planet, star and summary endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

/// Largest page any planet endpoint returns.
pub const MAX_LIMIT: u32 = 200;

pub const DEFAULT_LIST_LIMIT: u32 = 50;
pub const DEFAULT_FILTER_LIMIT: u32 = 200;
pub const DEFAULT_STARS_LIMIT: u32 = 50;
pub const DEFAULT_SUMMARY_LIMIT: u32 = 20;

/// `GET /exoplanets` parameters.
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 1000))]
    pub offset: Option<u32>,

    pub search: Option<String>,
}

/// `GET /exoplanets/search` parameters.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(required(message = "q is required"), length(min = 1))]
    pub q: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u32>,
}

/// `GET /exoplanets/filter` parameters. Bounds are inclusive.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_mass_bounds"))]
pub struct MassFilterParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub min_mass: Option<f64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_mass: Option<f64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u32>,
}

fn validate_mass_bounds(params: &MassFilterParams) -> Result<(), ValidationError> {
    let bounds = [params.min_mass, params.max_mass];
    if bounds.iter().flatten().any(|v| !v.is_finite()) {
        return Err(ValidationError::new("mass_not_finite")
            .with_message("mass bounds must be finite numbers".into()));
    }
    if let (Some(min), Some(max)) = (params.min_mass, params.max_mass)
        && min > max
    {
        return Err(ValidationError::new("mass_range")
            .with_message("min_mass must not exceed max_mass".into()));
    }
    Ok(())
}

/// `limit` parameter shared by `/stars` and `/research/summary`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LimitParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 200))]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(min: Option<f64>, max: Option<f64>) -> MassFilterParams {
        MassFilterParams {
            min_mass: min,
            max_mass: max,
            limit: None,
        }
    }

    #[test]
    fn test_limit_bounds() {
        let ok = ListParams {
            limit: Some(200),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let zero = ListParams {
            limit: Some(0),
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let over = LimitParams { limit: Some(201) };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_offset_is_capped() {
        let deepest = ListParams {
            offset: Some(1000),
            ..Default::default()
        };
        assert!(deepest.validate().is_ok());

        let beyond = ListParams {
            offset: Some(1001),
            ..Default::default()
        };
        assert!(beyond.validate().is_err());
    }

    #[test]
    fn test_search_requires_q() {
        assert!(SearchParams::default().validate().is_err());

        let empty = SearchParams {
            q: Some(String::new()),
            limit: None,
        };
        assert!(empty.validate().is_err());

        let ok = SearchParams {
            q: Some("kepler".to_string()),
            limit: None,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_mass_bounds() {
        assert!(filter(None, None).validate().is_ok());
        assert!(filter(Some(1.0), Some(1.0)).validate().is_ok());
        assert!(filter(Some(5.0), Some(1.0)).validate().is_err());
        assert!(filter(Some(f64::NAN), None).validate().is_err());
        assert!(filter(None, Some(f64::INFINITY)).validate().is_err());
    }

    #[test]
    fn test_parses_numbers_from_query_strings() {
        let p: MassFilterParams =
            serde_json::from_str(r#"{"min_mass": "1.5", "limit": "10"}"#).unwrap();
        assert_eq!(p.min_mass, Some(1.5));
        assert_eq!(p.max_mass, None);
        assert_eq!(p.limit, Some(10));

        assert!(serde_json::from_str::<ListParams>(r#"{"limit": "ten"}"#).is_err());
    }
}
