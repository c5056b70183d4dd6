//! Local SQLite mirror of the planet catalog.
//!
//! The mirror is produced out of band; this module only reads it.
//!
//! # Repositories
//!
//! - [`SqlitePlanetRepository`] - Read-only planet and host star queries

pub mod sqlite_planet_repository;

pub use sqlite_planet_repository::{SqlitePlanetRepository, StoreError};
