//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AsteroidService, ExoplanetService};
use crate::domain::repositories::PlanetRepository;

/// Services shared by all requests.
///
/// Caches live inside the services; cloning the state clones only `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub exoplanet_service: Arc<ExoplanetService<dyn PlanetRepository>>,
    pub asteroid_service: Arc<AsteroidService>,
}

impl AppState {
    pub fn new(
        exoplanet_service: Arc<ExoplanetService<dyn PlanetRepository>>,
        asteroid_service: Arc<AsteroidService>,
    ) -> Self {
        Self {
            exoplanet_service,
            asteroid_service,
        }
    }
}
