//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for upstream access, caching and persistence.
//!
//! # Modules
//!
//! - [`cache`] - Bounded LRU result caches
//! - [`persistence`] - Read-only SQLite mirror
//! - [`upstream`] - NASA HTTP clients with bounded retries

pub mod cache;
pub mod persistence;
pub mod upstream;
