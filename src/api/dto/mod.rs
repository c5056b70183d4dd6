//! Data Transfer Objects for API requests and responses.
//!
//! Query parameters are parsed with `serde_with` and checked with `validator`.
//! Planet, star and asteroid responses serialize the domain entities directly.

pub mod health;
pub mod planets;
