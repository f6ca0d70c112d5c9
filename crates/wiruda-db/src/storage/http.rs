//! HTTP implementation of ImageStorage
//!
//! Talks to the storage service's object API: a bucket-level DELETE whose JSON
//! body lists the object paths to remove.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use wiruda_common::StorageConfig;
use wiruda_core::error::DomainError;
use wiruda_core::traits::{ImageStorage, RepoResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct RemoveObjects<'a> {
    prefixes: [&'a str; 1],
}

/// Storage client authenticated with the service key
#[derive(Clone)]
pub struct HttpImageStorage {
    client: Client,
    base_url: String,
    service_key: String,
}

impl HttpImageStorage {
    /// Create a client for the storage service at `base_url`
    pub fn new(base_url: &str, service_key: impl Into<String>) -> RepoResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        })
    }

    /// Build from configuration. Returns `None` when the URL or key is missing.
    pub fn from_config(config: &StorageConfig) -> RepoResult<Option<Self>> {
        match (config.url.as_deref(), config.service_key.as_deref()) {
            (Some(url), Some(key)) => Self::new(url, key).map(Some),
            _ => Ok(None),
        }
    }

    fn bucket_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{bucket}", self.base_url)
    }
}

#[async_trait]
impl ImageStorage for HttpImageStorage {
    #[instrument(skip(self))]
    async fn remove(&self, bucket: &str, path: &str) -> RepoResult<()> {
        let response = self
            .client
            .delete(self.bucket_url(bucket))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&RemoveObjects { prefixes: [path] })
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Storage object removal rejected");
            return Err(DomainError::StorageError(format!(
                "remove {bucket}/{path} failed with {status}"
            )));
        }

        debug!("Storage object removed");
        Ok(())
    }
}
