//! Domain layer containing entities and the normalization pipeline.
//!
//! Nothing in this layer performs I/O; every function here is pure and can be
//! tested without a runtime.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures and the classification rule table
//! - [`dedup`] - First-seen deduplication of upstream rows
//! - [`normalizer`] - Field mapping from upstream payloads to canonical records
//! - [`aggregator`] - Summary statistics
//! - [`repositories`] - Data access trait definitions
//!
//! # Pipeline
//!
//! 1. The upstream payload is split into raw rows ([`normalizer::records_from_payload`])
//! 2. Repeated names are collapsed ([`dedup::dedupe`])
//! 3. Rows are mapped and classified ([`normalizer::normalize`])
//! 4. Search and mass filters are applied ([`repositories::PlanetQuery`])
//! 5. Summaries are computed on demand ([`aggregator::summarize`])

pub mod aggregator;
pub mod dedup;
pub mod entities;
pub mod normalizer;
pub mod repositories;
