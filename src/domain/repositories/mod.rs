//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for service tests.

pub mod planet_repository;

pub use planet_repository::{MAX_OFFSET, PlanetQuery, PlanetRepository};

#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
