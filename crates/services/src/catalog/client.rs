use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::ports::{CastCredit, CatalogClientTrait, CatalogError, PersonSearchResult};
use super::transport::{RetryPolicy, RetryingTransport};

/// HTTP client for the TVMaze API
pub struct TvMazeClient {
    transport: RetryingTransport,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new TVMaze client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g. "https://api.tvmaze.com")
    /// * `policy` - Retry and timeout settings applied to every request
    pub fn new(base_url: impl Into<String>, policy: RetryPolicy) -> Result<Self, CatalogError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let transport = RetryingTransport::new(policy)?;

        tracing::info!(
            base_url = %base_url,
            max_retries = transport.policy().max_retries,
            timeout_ms = transport.policy().request_timeout.as_millis() as u64,
            "Catalog client initialized"
        );

        Ok(Self {
            transport,
            base_url,
        })
    }

    pub fn from_config(config: &config::CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(config.base_url.clone(), RetryPolicy::from(config))
    }

    /// Send a GET request and parse the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching from catalog");

        let body = self.transport.get(&url).await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl CatalogClientTrait for TvMazeClient {
    async fn search_people(&self, query: &str) -> Result<Vec<PersonSearchResult>, CatalogError> {
        self.get_json(&format!("/search/people?q={}", urlencoding::encode(query)))
            .await
    }

    async fn cast_credits(&self, person_id: i64) -> Result<Vec<CastCredit>, CatalogError> {
        let entries: Vec<serde_json::Value> = self
            .get_json(&format!("/people/{person_id}/castcredits?embed=show"))
            .await?;

        // Decode per entry: a malformed credit is dropped, not the whole list
        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<CastCredit>(entry) {
                Ok(credit) => Some(credit),
                Err(e) => {
                    tracing::debug!(person_id, error = %e, "Skipping malformed cast credit");
                    None
                }
            })
            .collect())
    }
}
