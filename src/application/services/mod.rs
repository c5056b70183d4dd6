//! Business logic services for the application layer.

pub mod asteroid_service;
pub mod exoplanet_service;

pub use asteroid_service::{AsteroidService, FeedCache};
pub use exoplanet_service::ExoplanetService;
