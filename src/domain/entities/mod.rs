//! Core domain entities.
//!
//! Entities are plain data structures; the pipeline steps that produce them
//! live in [`crate::domain::normalizer`], [`crate::domain::dedup`] and
//! [`crate::domain::aggregator`].
//!
//! # Entity Types
//!
//! - [`RawExoplanetRecord`] - An upstream row before normalization
//! - [`CanonicalPlanet`] - The normalized, API-facing planet record
//! - [`Classification`] - Physical category derived from radius and period
//! - [`HostStar`] - A star hosting known planets
//! - [`NearEarthObject`] - An asteroid from the NeoWs feed
//! - [`SummaryStatistics`] - Aggregates over a planet collection

pub mod asteroid;
pub mod classification;
pub mod planet;
pub mod star;
pub mod summary;

pub use asteroid::NearEarthObject;
pub use classification::{Classification, classify};
pub use planet::{CanonicalPlanet, PlanetCatalog, RawExoplanetRecord};
pub use star::HostStar;
pub use summary::{SummaryStatistics, UNKNOWN_METHOD};
