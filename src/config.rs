//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Planet Source
//!
//! ```bash
//! # Query the NASA Exoplanet Archive (default)
//! export PLANET_SOURCE="live"
//!
//! # Serve from a local SQLite mirror instead
//! export PLANET_SOURCE="sqlite"
//! export DATABASE_PATH="database/space.db"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NASA_API_KEY` - NeoWs key, required only by `/asteroids/today`
//! - `EXOPLANET_ARCHIVE_URL` / `NEO_FEED_URL` - Upstream endpoints
//! - `EXOPLANET_CACHE_CAPACITY` / `FEED_CACHE_CAPACITY` - LRU sizes (default: 32 / 4)
//! - `FETCH_MAX_ATTEMPTS` - Attempts per upstream call (default: 3, max: 10)
//! - `FETCH_RETRY_DELAY_MS` - Delay between attempts (default: 2000)
//! - `FETCH_TIMEOUT_SECS` - Per-attempt timeout (default: 30)
//! - `NEO_FEED_WINDOW_DAYS` - Days after today included in the feed (default: 0, max: 7)
//! - `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST` - Per-IP limits on data routes (default: 5 / 50)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::infrastructure::cache::{EXOPLANET_CACHE_CAPACITY, FEED_CACHE_CAPACITY};
use crate::infrastructure::upstream::{
    DEFAULT_ARCHIVE_URL, DEFAULT_NEO_FEED_URL, MAX_FEED_WINDOW_DAYS, RetryPolicy,
};

/// Where planet data is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetSource {
    /// NASA Exoplanet Archive over HTTP, cached in memory.
    Live,
    /// Local read-only SQLite mirror.
    Sqlite,
}

impl FromStr for PlanetSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "sqlite" => Ok(Self::Sqlite),
            other => anyhow::bail!("PLANET_SOURCE must be 'live' or 'sqlite', got '{}'", other),
        }
    }
}

impl fmt::Display for PlanetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// NeoWs API key. Never logged in full.
    pub nasa_api_key: Option<String>,
    pub exoplanet_archive_url: String,
    pub neo_feed_url: String,
    pub planet_source: PlanetSource,
    /// SQLite mirror location, used when `planet_source` is `sqlite`.
    pub database_path: PathBuf,
    pub exoplanet_cache_capacity: usize,
    pub feed_cache_capacity: usize,

    // ── Upstream fetch policy ───────────────────────────────────────────────
    pub fetch_max_attempts: u32,
    pub fetch_retry_delay_ms: u64,
    pub fetch_timeout_secs: u64,
    /// Days after the start date included in the NEO feed window.
    pub neo_feed_window_days: u32,

    // ── Rate limiting ───────────────────────────────────────────────────────
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

/// Reads `name` and parses it, falling back to `default` when unset.
///
/// A set but unparseable value is an error rather than a silent default.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has invalid value '{}': {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let nasa_api_key = env::var("NASA_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let exoplanet_archive_url =
            env::var("EXOPLANET_ARCHIVE_URL").unwrap_or_else(|_| DEFAULT_ARCHIVE_URL.to_string());
        let neo_feed_url =
            env::var("NEO_FEED_URL").unwrap_or_else(|_| DEFAULT_NEO_FEED_URL.to_string());

        let planet_source = parse_var("PLANET_SOURCE", PlanetSource::Live)
            .context("Failed to load planet source")?;
        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("database/space.db"));

        let defaults = RetryPolicy::default();

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            nasa_api_key,
            exoplanet_archive_url,
            neo_feed_url,
            planet_source,
            database_path,
            exoplanet_cache_capacity: parse_var(
                "EXOPLANET_CACHE_CAPACITY",
                EXOPLANET_CACHE_CAPACITY,
            )?,
            feed_cache_capacity: parse_var("FEED_CACHE_CAPACITY", FEED_CACHE_CAPACITY)?,
            fetch_max_attempts: parse_var("FETCH_MAX_ATTEMPTS", defaults.max_attempts)?,
            fetch_retry_delay_ms: parse_var(
                "FETCH_RETRY_DELAY_MS",
                defaults.retry_delay.as_millis() as u64,
            )?,
            fetch_timeout_secs: parse_var(
                "FETCH_TIMEOUT_SECS",
                defaults.attempt_timeout.as_secs(),
            )?,
            neo_feed_window_days: parse_var("NEO_FEED_WINDOW_DAYS", 0)?,
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", 5)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 50)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - an upstream URL is not http(s)
    /// - a cache capacity or rate limit is zero
    /// - `fetch_max_attempts` is outside `1..=10`
    /// - `neo_feed_window_days` exceeds the feed maximum
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_http_url("EXOPLANET_ARCHIVE_URL", &self.exoplanet_archive_url)?;
        validate_http_url("NEO_FEED_URL", &self.neo_feed_url)?;

        if self.exoplanet_cache_capacity == 0 {
            anyhow::bail!("EXOPLANET_CACHE_CAPACITY must be at least 1");
        }
        if self.feed_cache_capacity == 0 {
            anyhow::bail!("FEED_CACHE_CAPACITY must be at least 1");
        }

        if self.fetch_max_attempts == 0 || self.fetch_max_attempts > 10 {
            anyhow::bail!(
                "FETCH_MAX_ATTEMPTS must be between 1 and 10, got {}",
                self.fetch_max_attempts
            );
        }
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECS must be greater than 0");
        }

        if self.neo_feed_window_days > MAX_FEED_WINDOW_DAYS {
            anyhow::bail!(
                "NEO_FEED_WINDOW_DAYS must be at most {}, got {}",
                MAX_FEED_WINDOW_DAYS,
                self.neo_feed_window_days
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be at least 1");
        }

        Ok(())
    }

    /// Retry policy for upstream fetches.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.fetch_max_attempts,
            retry_delay: Duration::from_millis(self.fetch_retry_delay_ms),
            attempt_timeout: Duration::from_secs(self.fetch_timeout_secs),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Planet source: {}", self.planet_source);
        match self.planet_source {
            PlanetSource::Live => {
                tracing::info!("  Exoplanet Archive: {}", self.exoplanet_archive_url)
            }
            PlanetSource::Sqlite => {
                tracing::info!("  Database: {}", self.database_path.display())
            }
        }
        tracing::info!("  NEO feed: {}", self.neo_feed_url);

        if let Some(ref key) = self.nasa_api_key {
            tracing::info!("  NASA API key: {}", mask_secret(key));
        } else {
            tracing::info!("  NASA API key: not set (/asteroids/today disabled)");
        }

        tracing::info!(
            "  Caches: {} exoplanet windows, {} feed windows",
            self.exoplanet_cache_capacity,
            self.feed_cache_capacity
        );
        tracing::info!(
            "  Fetch: {} attempts, {}ms delay, {}s timeout",
            self.fetch_max_attempts,
            self.fetch_retry_delay_ms,
            self.fetch_timeout_secs
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL", name))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "{} must start with 'http://' or 'https://', got '{}'",
            name,
            value
        );
    }
    Ok(())
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `DEMO_KEY` → `DEMO***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "PLANET_SOURCE",
        "NASA_API_KEY",
        "FETCH_MAX_ATTEMPTS",
        "EXOPLANET_CACHE_CAPACITY",
        "NEO_FEED_WINDOW_DAYS",
        "DATABASE_PATH",
        "LISTEN",
        "LOG_FORMAT",
    ];

    fn clear_vars() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for name in VARS {
                env::remove_var(name);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            nasa_api_key: None,
            exoplanet_archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            neo_feed_url: DEFAULT_NEO_FEED_URL.to_string(),
            planet_source: PlanetSource::Live,
            database_path: PathBuf::from("database/space.db"),
            exoplanet_cache_capacity: 32,
            feed_cache_capacity: 4,
            fetch_max_attempts: 3,
            fetch_retry_delay_ms: 2000,
            fetch_timeout_secs: 30,
            neo_feed_window_days: 0,
            rate_limit_per_second: 5,
            rate_limit_burst: 50,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("DEMO_KEY"), "DEMO***");
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn test_planet_source_parsing() {
        assert_eq!("live".parse::<PlanetSource>().unwrap(), PlanetSource::Live);
        assert_eq!(" SQLite ".parse::<PlanetSource>().unwrap(), PlanetSource::Sqlite);
        assert!("archive".parse::<PlanetSource>().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8000".to_string();

        config.neo_feed_url = "ftp://api.nasa.gov/feed".to_string();
        assert!(config.validate().is_err());
        config.neo_feed_url = DEFAULT_NEO_FEED_URL.to_string();

        config.exoplanet_cache_capacity = 0;
        assert!(config.validate().is_err());
        config.exoplanet_cache_capacity = 32;

        config.fetch_max_attempts = 11;
        assert!(config.validate().is_err());
        config.fetch_max_attempts = 1;
        assert!(config.validate().is_ok());

        config.neo_feed_window_days = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = valid_config();
        let policy = config.retry_policy();

        assert_eq!(policy, RetryPolicy::default());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.planet_source, PlanetSource::Live);
        assert_eq!(config.exoplanet_cache_capacity, 32);
        assert_eq!(config.fetch_max_attempts, 3);
        assert_eq!(config.database_path, PathBuf::from("database/space.db"));
        assert!(config.nasa_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PLANET_SOURCE", "sqlite");
            env::set_var("DATABASE_PATH", "/tmp/mirror.db");
            env::set_var("NASA_API_KEY", "  ");
            env::set_var("NEO_FEED_WINDOW_DAYS", "3");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.planet_source, PlanetSource::Sqlite);
        assert_eq!(config.database_path, PathBuf::from("/tmp/mirror.db"));
        assert!(config.nasa_api_key.is_none());
        assert_eq!(config.neo_feed_window_days, 3);

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_unparseable_number_is_an_error() {
        clear_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("FETCH_MAX_ATTEMPTS", "three");
        }

        assert!(Config::from_env().is_err());

        clear_vars();
    }
}
