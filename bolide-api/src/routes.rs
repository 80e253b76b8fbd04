//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dataset queries
        .route("/meteors", get(handlers::list_meteors))
        .route("/years", get(handlers::list_years))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use bolide_core::MeteorRecord;

    use crate::state::ApiConfig;

    fn seeded_state(records: Vec<MeteorRecord>) -> Arc<AppState> {
        let state = Arc::new(AppState::new(ApiConfig::default()));
        state.store.replace(records);
        state
    }

    fn sample_records() -> Vec<MeteorRecord> {
        vec![
            MeteorRecord::new(Some("2001-01-01T00:00:00.000"), Some("100")),
            MeteorRecord::new(Some("2001-06-01T00:00:00.000"), Some("5")),
            MeteorRecord::new(Some("1999-01-01T00:00:00.000"), Some("500")),
        ]
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(seeded_state(sample_records()));
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["records_count"], 3);
    }

    #[tokio::test]
    async fn test_meteors_empty_store() {
        let app = create_router(seeded_state(Vec::new()));
        let (status, body) = get_json(app, "/meteors?year=2001&page=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_meteors_year_filter() {
        let app = create_router(seeded_state(sample_records()));
        let (status, body) = get_json(app, "/meteors?year=2001").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][0]["mass"], "100");
        assert_eq!(body["data"][1]["mass"], "5");
    }

    #[tokio::test]
    async fn test_meteors_mass_filter() {
        let app = create_router(seeded_state(sample_records()));
        let (_, body) = get_json(app, "/meteors?mass=50").await;

        assert_eq!(body["total"], 2);
        assert_eq!(body["data"][0]["mass"], "100");
        assert_eq!(body["data"][1]["mass"], "500");
    }

    #[tokio::test]
    async fn test_meteors_year_filter_with_limit() {
        let app = create_router(seeded_state(sample_records()));
        let (_, body) = get_json(app, "/meteors?year=2001&limit=1").await;

        assert_eq!(body["total"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["mass"], "100");
    }

    #[tokio::test]
    async fn test_meteors_malformed_input_still_200() {
        let app = create_router(seeded_state(sample_records()));
        let (status, body) = get_json(app, "/meteors?page=abc&limit=xyz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_meteors_repeat_request_is_served_from_cache() {
        let state = seeded_state(sample_records());
        let app = create_router(state.clone());

        let (_, first) = get_json(app.clone(), "/meteors?year=2001").await;

        // replace the store; a fresh computation would now see nothing
        state.store.replace(Vec::new());

        let (_, second) = get_json(app, "/meteors?year=2001").await;
        assert_eq!(first, second);

        let stats = state.cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[tokio::test]
    async fn test_meteors_cache_key_includes_paging_and_order() {
        let state = seeded_state(sample_records());
        let app = create_router(state.clone());

        get_json(app.clone(), "/meteors?year=2001").await;
        get_json(app.clone(), "/meteors?year=2001&limit=1").await;
        get_json(app.clone(), "/meteors?year=2001&mass=50").await;
        get_json(app, "/meteors?mass=50&year=2001").await;

        assert_eq!(state.cache.len(), 4);
        assert_eq!(state.cache.stats().hits, 0);
    }

    #[tokio::test]
    async fn test_years_sorted_lexicographically() {
        let app = create_router(seeded_state(vec![
            MeteorRecord::new(Some("0002-01-01"), None),
            MeteorRecord::new(Some("1000-01-01"), None),
            MeteorRecord::new(Some("0010-01-01"), None),
            MeteorRecord::new(Some("0010-06-01"), None),
        ]));
        let (status, body) = get_json(app, "/years").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!(["10", "1000", "2"]));
    }

    #[tokio::test]
    async fn test_years_empty_store() {
        let app = create_router(seeded_state(Vec::new()));
        let (status, body) = get_json(app, "/years").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_years_is_never_cached() {
        let state = seeded_state(sample_records());
        let app = create_router(state.clone());

        let (_, before) = get_json(app.clone(), "/years").await;
        assert_eq!(before["years"], serde_json::json!(["1999", "2001"]));

        state.store.replace(vec![MeteorRecord::new(Some("1875-01-01"), None)]);

        let (_, after) = get_json(app, "/years").await;
        assert_eq!(after["years"], serde_json::json!(["1875"]));
    }
}
