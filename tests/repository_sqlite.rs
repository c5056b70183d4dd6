mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use space_research_api::domain::entities::Classification;
use space_research_api::domain::repositories::{PlanetQuery, PlanetRepository};
use space_research_api::error::AppError;
use space_research_api::infrastructure::persistence::SqlitePlanetRepository;
use tempfile::TempDir;

async fn seeded_mirror() -> (TempDir, SqlitePlanetRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("space.db");

    common::create_mirror(
        &path,
        &[
            ("Kepler-1b", Some("Kepler-1"), Some(5.0), Some(1.0), Some(0.9), Some("Transit"), Some(2010)),
            ("HD-2c", Some("HD-2"), Some(3.0), Some(5.0), Some(300.0), Some("Radial Velocity"), Some(1999)),
            ("Kepler-3d", Some("Kepler-3"), Some(40.5), Some(1.2), Some(1.5), Some("Transit"), Some(2016)),
            ("Kepler-4e", Some("Kepler-3"), Some(12.0), None, None, None, None),
            ("100%_real", None, None, Some(-2.0), None, None, None),
        ],
    )
    .await;

    let repo = SqlitePlanetRepository::new(path);
    (dir, repo)
}

fn names(planets: &[space_research_api::domain::entities::CanonicalPlanet]) -> Vec<&str> {
    planets.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_list_in_insertion_order_with_classification() {
    let (_dir, repo) = seeded_mirror().await;

    let planets = repo.find_planets(PlanetQuery::new(10)).await.unwrap();

    assert_eq!(
        names(&planets),
        vec!["Kepler-1b", "HD-2c", "Kepler-3d", "Kepler-4e", "100%_real"]
    );
    assert_eq!(planets[0].classification, Classification::Rocky);
    assert_eq!(planets[1].classification, Classification::HotJupiter);
    assert_eq!(planets[3].classification, Classification::Unknown);
    // negative radius is dropped before classification
    assert_eq!(planets[4].radius_earth, None);
    assert_eq!(planets[4].classification, Classification::Unknown);
}

#[tokio::test]
async fn test_limit_and_offset() {
    let (_dir, repo) = seeded_mirror().await;

    let planets = repo
        .find_planets(PlanetQuery::new(2).with_offset(1))
        .await
        .unwrap();

    assert_eq!(names(&planets), vec!["HD-2c", "Kepler-3d"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let (_dir, repo) = seeded_mirror().await;

    let planets = repo
        .find_planets(PlanetQuery::new(10).with_search(Some("KEPLER".to_string())))
        .await
        .unwrap();

    assert_eq!(names(&planets), vec!["Kepler-1b", "Kepler-3d", "Kepler-4e"]);
}

#[tokio::test]
async fn test_search_is_bound_not_interpolated() {
    let (_dir, repo) = seeded_mirror().await;

    let injected = repo
        .find_planets(PlanetQuery::new(10).with_search(Some("x' OR '1'='1".to_string())))
        .await
        .unwrap();
    assert!(injected.is_empty());

    let dropped = repo
        .find_planets(
            PlanetQuery::new(10).with_search(Some("'; DROP TABLE exoplanets; --".to_string())),
        )
        .await
        .unwrap();
    assert!(dropped.is_empty());

    let still_there = repo.find_planets(PlanetQuery::new(10)).await.unwrap();
    assert_eq!(still_there.len(), 5);
}

#[tokio::test]
async fn test_like_wildcards_match_literally() {
    let (_dir, repo) = seeded_mirror().await;

    let percent = repo
        .find_planets(PlanetQuery::new(10).with_search(Some("%".to_string())))
        .await
        .unwrap();
    assert_eq!(names(&percent), vec!["100%_real"]);

    let underscore = repo
        .find_planets(PlanetQuery::new(10).with_search(Some("_".to_string())))
        .await
        .unwrap();
    assert_eq!(names(&underscore), vec!["100%_real"]);
}

#[tokio::test]
async fn test_mass_range_inclusive() {
    let (_dir, repo) = seeded_mirror().await;

    let planets = repo
        .find_planets(PlanetQuery::new(10).with_mass_range(Some(0.9), Some(1.5)))
        .await
        .unwrap();
    assert_eq!(names(&planets), vec!["Kepler-1b", "Kepler-3d"]);

    let heavy = repo
        .find_planets(PlanetQuery::new(10).with_mass_range(Some(100.0), None))
        .await
        .unwrap();
    assert_eq!(names(&heavy), vec!["HD-2c"]);
}

#[tokio::test]
async fn test_host_stars_are_distinct_without_parameters() {
    let (_dir, repo) = seeded_mirror().await;

    let stars = repo.find_host_stars(10).await.unwrap();

    let star_names: Vec<&str> = stars.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(star_names, vec!["Kepler-1", "HD-2", "Kepler-3"]);
    assert!(stars.iter().all(|s| s.mass_solar.is_none()));
}

#[tokio::test]
async fn test_health_check_counts_rows() {
    let (_dir, repo) = seeded_mirror().await;

    let status = repo.health_check().await.unwrap();

    assert!(status.contains("5 planets"));
    assert_eq!(repo.source_name(), "sqlite");
}

#[tokio::test]
async fn test_missing_file_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.db");
    let repo = SqlitePlanetRepository::new(&path);

    let err = repo.find_planets(PlanetQuery::new(10)).await.unwrap_err();

    assert!(matches!(err, AppError::StoreUnavailable { .. }));
    assert!(!path.exists(), "read-only access must not create the file");
}

#[tokio::test]
async fn test_missing_table_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.db");
    common::create_mirror(&path, &[]).await;
    {
        use sqlx::{ConnectOptions, Connection, sqlite::SqliteConnectOptions};
        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .connect()
            .await
            .unwrap();
        sqlx::query("DROP TABLE exoplanets")
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }
    let repo = SqlitePlanetRepository::new(&path);

    let err = repo.find_planets(PlanetQuery::new(10)).await.unwrap_err();

    assert!(matches!(err, AppError::StoreUnavailable { .. }));
}

#[tokio::test]
async fn test_http_routes_over_mirror() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("space.db");
    common::create_mirror(
        &path,
        &[("Kepler-1b", Some("Kepler-1"), Some(5.0), Some(1.0), Some(0.9), Some("Transit"), Some(2010))],
    )
    .await;
    let server = TestServer::new(common::sqlite_router(path)).unwrap();

    let response = server.get("/exoplanets").await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json[0]["name"], "Kepler-1b");
    assert_eq!(json[0]["classification"], "Rocky");

    let summary = server.get("/research/summary").await.json::<Value>();
    assert_eq!(summary["total"], 1);
    assert_eq!(summary["latest_year"], 2010);
}

#[tokio::test]
async fn test_http_missing_mirror_is_500_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(common::sqlite_router(dir.path().join("absent.db"))).unwrap();

    let response = server.get("/exoplanets").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "store_unavailable");
}

#[tokio::test]
async fn test_blank_names_do_not_shorten_pages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("space.db");
    common::create_mirror(
        &path,
        &[
            ("", Some("Ghost-1"), None, Some(1.0), None, None, None),
            ("   ", Some("Ghost-2"), None, Some(1.0), None, None, None),
            ("Kepler-1b", Some("Kepler-1"), Some(5.0), Some(1.0), Some(0.9), Some("Transit"), Some(2010)),
            ("HD-2c", Some("HD-2"), Some(3.0), Some(5.0), Some(300.0), Some("Radial Velocity"), Some(1999)),
        ],
    )
    .await;
    let repo = SqlitePlanetRepository::new(path);

    let planets = repo.find_planets(PlanetQuery::new(2)).await.unwrap();

    assert_eq!(names(&planets), vec!["Kepler-1b", "HD-2c"]);
}
