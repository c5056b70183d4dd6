//! SQLite implementation of the planet repository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, FromRow, QueryBuilder, Sqlite, SqliteConnection};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::{CanonicalPlanet, HostStar};
use crate::domain::normalizer::non_negative;
use crate::domain::repositories::{PlanetQuery, PlanetRepository};
use crate::error::AppError;

const PLANET_COLUMNS: &str = "name, host_star, orbital_period_days, radius_earth, mass_earth, \
     discovery_method, discovery_year";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database file {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("failed to open database: {0}")]
    Open(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

#[derive(Debug, FromRow)]
struct PlanetRow {
    name: Option<String>,
    host_star: Option<String>,
    orbital_period_days: Option<f64>,
    radius_earth: Option<f64>,
    mass_earth: Option<f64>,
    discovery_method: Option<String>,
    discovery_year: Option<i64>,
}

impl PlanetRow {
    fn into_planet(self) -> Option<CanonicalPlanet> {
        let name = trimmed(self.name)?;
        Some(CanonicalPlanet::new(
            name,
            trimmed(self.host_star),
            non_negative(self.orbital_period_days),
            non_negative(self.radius_earth),
            non_negative(self.mass_earth),
            trimmed(self.discovery_method),
            self.discovery_year.and_then(|y| i32::try_from(y).ok()),
        ))
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Escapes `LIKE` wildcards so the search term matches literally.
fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Read-only repository over the `exoplanets` table of a SQLite file.
///
/// Opens one connection per query and closes it afterwards. Classification is
/// recomputed from the stored radius and period. All caller input is bound.
pub struct SqlitePlanetRepository {
    path: PathBuf,
}

impl SqlitePlanetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        if !matches!(tokio::fs::try_exists(&self.path).await, Ok(true)) {
            return Err(StoreError::Missing(self.path.clone()));
        }

        SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
            .create_if_missing(false)
            .connect()
            .await
            .map_err(StoreError::Open)
    }

    async fn query_planets(&self, query: &PlanetQuery) -> Result<Vec<CanonicalPlanet>, StoreError> {
        let mut conn = self.connect().await?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {PLANET_COLUMNS} FROM exoplanets WHERE TRIM(name) <> ''"
        ));
        if let Some(search) = &query.search {
            builder
                .push(" AND name LIKE ")
                .push_bind(like_pattern(search))
                .push(" ESCAPE '\\'");
        }
        if let Some(min) = query.min_mass {
            builder.push(" AND mass_earth >= ").push_bind(min);
        }
        if let Some(max) = query.max_mass {
            builder.push(" AND mass_earth <= ").push_bind(max);
        }
        builder
            .push(" ORDER BY rowid LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(query.offset));

        let rows = builder
            .build_query_as::<PlanetRow>()
            .fetch_all(&mut conn)
            .await
            .map_err(StoreError::Query)?;
        close(conn).await;

        debug!(rows = rows.len(), "Read planets from SQLite mirror");
        Ok(rows.into_iter().filter_map(PlanetRow::into_planet).collect())
    }

    async fn query_host_stars(&self, limit: u32) -> Result<Vec<HostStar>, StoreError> {
        let mut conn = self.connect().await?;

        let names: Vec<String> = sqlx::query_scalar(
            "SELECT TRIM(host_star) FROM exoplanets \
             WHERE host_star IS NOT NULL AND TRIM(host_star) <> '' \
             GROUP BY TRIM(host_star) ORDER BY MIN(rowid) LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&mut conn)
        .await
        .map_err(StoreError::Query)?;
        close(conn).await;

        Ok(names.into_iter().map(HostStar::named).collect())
    }

    async fn count_planets(&self) -> Result<i64, StoreError> {
        let mut conn = self.connect().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exoplanets")
            .fetch_one(&mut conn)
            .await
            .map_err(StoreError::Query)?;
        close(conn).await;
        Ok(count)
    }
}

async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close SQLite mirror connection");
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    async fn find_planets(&self, query: PlanetQuery) -> Result<Vec<CanonicalPlanet>, AppError> {
        Ok(self.query_planets(&query).await?)
    }

    async fn find_host_stars(&self, limit: u32) -> Result<Vec<HostStar>, AppError> {
        Ok(self.query_host_stars(limit).await?)
    }

    async fn health_check(&self) -> Result<String, AppError> {
        let count = self.count_planets().await?;
        Ok(format!(
            "SQLite mirror {}, {} planets",
            self.path.display(),
            count
        ))
    }

    fn source_name(&self) -> &'static str {
        "sqlite"
    }
}
