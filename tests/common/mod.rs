#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use parking_lot::Mutex;
use serde_json::{Value, json};
use space_research_api::api::handlers::{health_handler, not_found_handler, root_handler};
use space_research_api::api::routes::data_routes;
use space_research_api::config::{Config, PlanetSource};
use space_research_api::infrastructure::upstream::{HttpTransport, TransportError};
use space_research_api::server::build_state_with_transport;
use space_research_api::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ARCHIVE_URL: &str = "https://archive.test/TAP/sync";
pub const NEO_FEED_URL: &str = "https://neo.test/feed";

/// Transport that answers from canned payloads, keyed by endpoint.
///
/// A `None` payload answers with HTTP 503 on every attempt.
pub struct ScriptedTransport {
    planets: Option<Value>,
    neo_feed: Option<Value>,
    archive_calls: AtomicUsize,
    feed_calls: AtomicUsize,
    last_query: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new(planets: Option<Value>, neo_feed: Option<Value>) -> Self {
        Self {
            planets,
            neo_feed,
            archive_calls: AtomicUsize::new(0),
            feed_calls: AtomicUsize::new(0),
            last_query: Mutex::new(Vec::new()),
        }
    }

    pub fn healthy() -> Self {
        Self::new(Some(sample_planets()), Some(sample_neo_feed()))
    }

    pub fn archive_calls(&self) -> usize {
        self.archive_calls.load(Ordering::SeqCst)
    }

    pub fn feed_calls(&self) -> usize {
        self.feed_calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.last_query.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value, TransportError> {
        *self.last_query.lock() = query.to_vec();

        let payload = if url == ARCHIVE_URL {
            self.archive_calls.fetch_add(1, Ordering::SeqCst);
            &self.planets
        } else if url == NEO_FEED_URL {
            self.feed_calls.fetch_add(1, Ordering::SeqCst);
            &self.neo_feed
        } else {
            return Err(TransportError::Connection(format!("unexpected url {url}")));
        };

        payload
            .clone()
            .ok_or(TransportError::Status { status: 503 })
    }
}

/// Archive rows: a duplicate Kepler-1b, a hot Jupiter, and rows with gaps.
pub fn sample_planets() -> Value {
    json!([
        {"pl_name": "Kepler-1b", "hostname": "Kepler-1", "pl_rade": 1.0, "pl_orbper": 5,
         "pl_bmasse": 0.9, "discoverymethod": "Transit", "disc_year": 2010,
         "st_mass": 1.02, "st_rad": 0.98, "st_teff": 5700},
        {"pl_name": "Kepler-1b", "hostname": "Kepler-1", "pl_rade": 1.0, "pl_orbper": 5},
        {"pl_name": "HD-2c", "hostname": "HD-2", "pl_rade": 5.0, "pl_orbper": 3,
         "pl_bmasse": 300.0, "discoverymethod": "Radial Velocity", "disc_year": 1999},
        {"pl_name": "Kepler-3d", "hostname": "Kepler-3", "pl_rade": 1.2, "pl_orbper": 40.5,
         "pl_bmasse": 1.5, "discoverymethod": "Transit", "disc_year": 2016},
        {"pl_name": "TOI-4e", "hostname": "TOI-4", "pl_rade": "not-a-number", "pl_orbper": 12,
         "discoverymethod": "Transit", "disc_year": 2021}
    ])
}

pub fn sample_neo_feed() -> Value {
    json!({
        "element_count": 2,
        "near_earth_objects": {
            "2024-06-01": [
                {"name": "(2024 AB)", "is_potentially_hazardous_asteroid": true,
                 "estimated_diameter": {"meters": {"estimated_diameter_min": 80.0, "estimated_diameter_max": 180.0}},
                 "close_approach_data": [{"close_approach_date": "2024-06-01"}]},
                {"name": "(2019 XY)", "is_potentially_hazardous_asteroid": false}
            ]
        }
    })
}

pub fn test_config(source: PlanetSource, api_key: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        nasa_api_key: api_key.map(str::to_string),
        exoplanet_archive_url: ARCHIVE_URL.to_string(),
        neo_feed_url: NEO_FEED_URL.to_string(),
        planet_source: source,
        database_path: PathBuf::from("/nonexistent/space.db"),
        exoplanet_cache_capacity: 32,
        feed_cache_capacity: 4,
        fetch_max_attempts: 3,
        fetch_retry_delay_ms: 0,
        fetch_timeout_secs: 5,
        neo_feed_window_days: 0,
        rate_limit_per_second: 5,
        rate_limit_burst: 50,
    }
}

pub fn create_test_state(config: &Config, transport: Arc<ScriptedTransport>) -> AppState {
    build_state_with_transport(config, transport)
}

/// Full route table without the rate limiter, which needs peer addresses.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(data_routes())
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn live_router(transport: Arc<ScriptedTransport>, api_key: Option<&str>) -> Router {
    let config = test_config(PlanetSource::Live, api_key);
    test_router(create_test_state(&config, transport))
}

/// Creates a SQLite mirror at `path` with the given rows:
/// `(name, host_star, period, radius, mass, method, year)`.
pub async fn create_mirror(
    path: &std::path::Path,
    rows: &[(
        &str,
        Option<&str>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<&str>,
        Option<i64>,
    )],
) {
    use sqlx::{ConnectOptions, Connection, sqlite::SqliteConnectOptions};

    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE exoplanets (
            name TEXT,
            host_star TEXT,
            orbital_period_days REAL,
            radius_earth REAL,
            mass_earth REAL,
            discovery_method TEXT,
            discovery_year INTEGER
        )",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    for (name, host, period, radius, mass, method, year) in rows {
        sqlx::query("INSERT INTO exoplanets VALUES (?, ?, ?, ?, ?, ?, ?)")
            .bind(*name)
            .bind(*host)
            .bind(*period)
            .bind(*radius)
            .bind(*mass)
            .bind(*method)
            .bind(*year)
            .execute(&mut conn)
            .await
            .unwrap();
    }

    conn.close().await.unwrap();
}

pub fn sqlite_router(database_path: PathBuf) -> Router {
    let mut config = test_config(PlanetSource::Sqlite, None);
    config.database_path = database_path;
    test_router(create_test_state(
        &config,
        Arc::new(ScriptedTransport::new(None, None)),
    ))
}
