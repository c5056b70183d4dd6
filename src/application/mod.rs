//! Application layer services.
//!
//! Services coordinate repository calls and cross-parameter validation, and
//! are shared by the HTTP handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::ExoplanetService`] - Planet listing, search, mass filter, host stars and summary
//! - [`services::AsteroidService`] - Near-Earth objects for today's feed window

pub mod services;
