//! PokeAPI client implementation.
//!
//! Cache-aside: look up the request URL in the cache, fetch on a miss, then
//! store the raw body back under the same URL. The network call happens
//! outside any cache lock.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use pokedex_cache::ExpiringCache;
use pokedex_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS, LOCATION_AREA_PATH};
use pokedex_core::error::{PokedexError, Result};
use pokedex_core::types::{LocationAreaDetail, LocationAreaPage};

/// PokeAPI client configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
    /// API root, without trailing slash (e.g. "https://pokeapi.co/api/v2")
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

/// Client for the PokeAPI location-area endpoints.
pub struct PokeApiClient {
    config: ClientConfig,
    http_client: reqwest::Client,
    cache: ExpiringCache,
}

impl PokeApiClient {
    /// Creates a client that reads through `cache`.
    pub fn new(config: ClientConfig, cache: ExpiringCache) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PokedexError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            cache,
        })
    }

    /// URL of the first location-area listing page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/{}", self.config.base_url, LOCATION_AREA_PATH)
    }

    /// URL of a single location area.
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/{}/{}", self.config.base_url, LOCATION_AREA_PATH, name)
    }

    /// Returns the raw body for `url`, from the cache when present.
    #[instrument(skip(self))]
    pub async fn fetch_raw(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, bytes = body.len(), "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss, fetching");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PokedexError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| PokedexError::HttpError(e.to_string()))?;

        self.cache.add(url, body.clone());
        debug!(url, bytes = body.len(), "Cached response");

        Ok(body)
    }

    /// Fetches a location-area listing page. `None` means the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match url {
            Some(u) => u.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches a single location area by name or ID.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = self.location_area_url(name);
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_raw(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
