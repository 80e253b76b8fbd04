//! One-shot dataset fetch.

use tracing::{error, info, instrument};

use bolide_core::constants::DATASET_URL;
use bolide_core::{BolideError, MeteorRecord, Result};

use crate::store::MeteorStore;

/// Dataset source configuration.
#[derive(Clone, Debug)]
pub struct DatasetConfig {
    /// URL returning the full dataset as a JSON array of records.
    pub url: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: DATASET_URL.into(),
        }
    }
}

/// HTTP client for the external dataset.
pub struct DatasetClient {
    config: DatasetConfig,
    http_client: reqwest::Client,
}

impl DatasetClient {
    /// Creates a client for the default dataset URL.
    pub fn new() -> Self {
        Self::with_config(DatasetConfig::default())
    }

    /// Creates a client for a specific dataset URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_config(DatasetConfig { url: url.into() })
    }

    /// Creates a client with custom configuration.
    ///
    /// The request carries no timeout: the fetch happens once at startup
    /// and the server answers with whatever is in the store in the
    /// meantime.
    pub fn with_config(config: DatasetConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetches the full dataset.
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch(&self) -> Result<Vec<MeteorRecord>> {
        let response = self
            .http_client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| BolideError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BolideError::FetchFailed(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<MeteorRecord>>()
            .await
            .map_err(|e| BolideError::DecodeFailed(e.to_string()))
    }
}

impl Default for DatasetClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the dataset once and replaces the store contents.
///
/// Fails silently: on any fetch error the store keeps its previous contents
/// (empty on first failure) and the error is logged, not surfaced. No retry,
/// no backoff.
pub async fn load(client: &DatasetClient, store: &MeteorStore) {
    match client.fetch().await {
        Ok(records) => {
            info!(count = records.len(), "Meteor data fetched successfully");
            store.replace(records);
        }
        Err(err) => {
            error!(error = %err, "Error fetching meteor data");
        }
    }
}
