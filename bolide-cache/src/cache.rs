//! In-memory TTL cache for query responses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use bolide_core::constants::RESPONSE_CACHE_TTL_MS;
use bolide_core::MeteorPage;

/// Cache entry with creation time.
#[derive(Clone)]
struct CacheEntry {
    payload: MeteorPage,
    inserted_at: Instant,
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Entry time-to-live in milliseconds.
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: RESPONSE_CACHE_TTL_MS,
        }
    }
}

/// In-memory cache for computed query responses.
///
/// Thread-safe, TTL-based. Expired entries are indistinguishable from
/// absent ones and are lazily overwritten by the next `store` to the same
/// key; there is no proactive eviction and no size bound.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    /// Creates a cache with the default TTL.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::from_millis(config.ttl_ms),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached payload for `key` if it exists and is fresh.
    ///
    /// Expired entries report as not found, exactly like absent ones.
    pub fn lookup(&self, key: &str) -> Option<MeteorPage> {
        let entries = self.entries.read();
        let fresh = entries
            .get(key)
            .filter(|entry| entry.inserted_at.elapsed() <= self.ttl)
            .map(|entry| entry.payload.clone());

        match fresh {
            Some(payload) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(payload)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Inserts or overwrites the entry for `key`, stamped with the current
    /// time.
    pub fn store(&self, key: &str, payload: MeteorPage) {
        self.entries.write().insert(
            key.to_owned(),
            CacheEntry {
                payload,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Returns the number of cached entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
///
/// The hit/miss counters are the observable recomputation side-channel:
/// a repeated request that was served from cache bumps `hits` without the
/// pipeline running.
#[derive(Clone, Copy, Debug)]
pub struct CacheStats {
    /// Entries currently held, fresh or expired.
    pub entries: usize,
    /// Lookups answered from cache.
    pub hits: u64,
    /// Lookups that found nothing fresh.
    pub misses: u64,
}
