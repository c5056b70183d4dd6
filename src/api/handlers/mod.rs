//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod asteroids;
pub mod exoplanets;
pub mod health;
pub mod root;
pub mod stars;
pub mod summary;

pub use asteroids::asteroids_today_handler;
pub use exoplanets::{
    filter_exoplanets_handler, list_exoplanets_handler, search_exoplanets_handler,
};
pub use health::health_handler;
pub use root::{not_found_handler, root_handler};
pub use stars::stars_handler;
pub use summary::research_summary_handler;
