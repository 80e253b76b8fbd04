//! App state: config, record store, response cache, dataset client.

use bolide_cache::ResponseCache;
use bolide_core::constants::DATASET_URL;
use bolide_dataset::{DatasetClient, DatasetConfig, MeteorStore};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// URL of the external dataset consumed once at startup.
    pub dataset_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.into(),
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            dataset_url: std::env::var("METEOR_DATASET_URL")
                .unwrap_or_else(|_| DATASET_URL.into()),
        }
    }
}

/// Shared state injected into every handler.
///
/// Created empty at process start, populated once by the startup fetch,
/// then only read.
pub struct AppState {
    /// Active configuration.
    pub config: ApiConfig,
    /// The in-memory dataset.
    pub store: MeteorStore,
    /// Short-lived cache of computed `/meteors` responses.
    pub cache: ResponseCache,
    /// Client used for the one-shot startup fetch.
    pub dataset: DatasetClient,
}

impl AppState {
    /// Creates empty state for the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let dataset = DatasetClient::with_config(DatasetConfig {
            url: config.dataset_url.clone(),
        });

        Self {
            config,
            store: MeteorStore::new(),
            cache: ResponseCache::new(),
            dataset,
        }
    }
}
