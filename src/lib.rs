//! # Space Research API
//!
//! Re-serves NASA exoplanet and near-Earth object data through a small,
//! normalized JSON API built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the normalize/dedupe/aggregate pipeline, repository traits
//! - **Application Layer** ([`application`]) - Services shared by HTTP handlers and the CLI
//! - **Infrastructure Layer** ([`infrastructure`]) - Upstream clients with retries, LRU caches, SQLite mirror
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Exoplanet Archive queries with deduplication and physical classification
//! - Bounded retries with fixed delay on every upstream call
//! - In-process LRU caching with coalesced concurrent misses
//! - Optional read-only SQLite mirror as the planet source
//! - Per-IP rate limiting and structured request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! export NASA_API_KEY="DEMO_KEY"   # Optional, enables /asteroids/today
//! cargo run
//! curl 'http://localhost:8000/exoplanets?limit=5'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

