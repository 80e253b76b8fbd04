//! API route handlers.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::extract::{RawQuery, State};
use axum::Json;
use tracing::debug;

use bolide_core::{MeteorPage, MeteorQuery};
use bolide_dataset::{distinct_years, run_query};

use crate::dto::{HealthResponse, YearsResponse};
use crate::state::AppState;

/// GET /meteors
///
/// Consults the response cache by serialized query key; on a miss, runs
/// the pipeline over a store snapshot and caches the result. Always 200:
/// malformed parameters degrade into empty or full results.
pub async fn list_meteors(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<MeteorPage> {
    let pairs = decode_query_pairs(query.as_deref().unwrap_or(""));
    let key = cache_key(&pairs);

    if let Some(cached) = state.cache.lookup(&key) {
        debug!(%key, "Cache hit!");
        return Json(cached);
    }
    debug!(%key, "Cache miss!");

    let params = MeteorQuery::from_pairs(&pairs);
    let records = state.store.snapshot();
    let page = run_query(&records, &params);
    state.cache.store(&key, page.clone());

    Json(page)
}

/// GET /years
///
/// Always recomputed from the store; no cache, no pagination.
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    let records = state.store.snapshot();
    let years = distinct_years(&records);

    debug!(count = years.len(), "Computed distinct years");

    Json(YearsResponse { years })
}

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);
    let uptime = start.elapsed().as_secs();

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: uptime,
        records_count: state.store.len(),
    })
}

/// Decodes a raw query string into key/value pairs, preserving arrival
/// order.
fn decode_query_pairs(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Serializes decoded pairs into the cache key, e.g. `{"year":"2001"}`.
///
/// The serialization is order-sensitive: two logically identical requests
/// that spell their parameters in a different order occupy distinct cache
/// entries.
fn cache_key(pairs: &[(String, String)]) -> String {
    let mut key = String::from("{");
    for (i, (name, value)) in pairs.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        key.push_str(&serde_json::Value::String(name.clone()).to_string());
        key.push(':');
        key.push_str(&serde_json::Value::String(value.clone()).to_string());
    }
    key.push('}');
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_preserves_order_and_percent_encoding() {
        let pairs = decode_query_pairs("mass=50&year=2001&note=a%20b");
        assert_eq!(
            pairs,
            vec![
                ("mass".to_string(), "50".to_string()),
                ("year".to_string(), "2001".to_string()),
                ("note".to_string(), "a b".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_bare_parameter() {
        assert_eq!(
            decode_query_pairs("year"),
            vec![("year".to_string(), String::new())]
        );
    }

    #[test]
    fn test_cache_key_empty_query() {
        assert_eq!(cache_key(&[]), "{}");
    }

    #[test]
    fn test_cache_key_is_order_sensitive() {
        let a = decode_query_pairs("year=2001&mass=50");
        let b = decode_query_pairs("mass=50&year=2001");
        assert_eq!(cache_key(&a), r#"{"year":"2001","mass":"50"}"#);
        assert_eq!(cache_key(&b), r#"{"mass":"50","year":"2001"}"#);
        assert_ne!(cache_key(&a), cache_key(&b));
    }

    #[test]
    fn test_cache_key_escapes_values() {
        let pairs = vec![("q".to_string(), "a\"b".to_string())];
        assert_eq!(cache_key(&pairs), r#"{"q":"a\"b"}"#);
    }
}
