//! PokéAPI client
//!
//! A thin HTTP transport in front of the catalog API. Every successful response
//! body is kept in the disk cache for the configured window, so the components
//! above never know whether a request reached the network.

use chrono::Duration;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::api::{PokemonResponse, SpeciesPage, SpeciesResponse};
use crate::cache::CacheManager;
use crate::config::DexConfig;

/// Errors that can occur when talking to the catalog API
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (DNS, connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with something other than 200
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The API answered 200 without a body
    #[error("Response body was empty")]
    EmptyBody,

    /// The body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the API reported the resource as absent rather than failing
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status(_) | CatalogError::EmptyBody)
    }
}

/// Client for the catalog API with a time-bounded response cache
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for persisting responses
    cache_manager: Option<CacheManager>,
    /// Base URL for the API (allows override for testing)
    base_url: String,
    /// How long cached bodies stay fresh
    cache_ttl: Duration,
}

impl CatalogClient {
    /// Creates a client using the XDG cache directory, if one exists
    pub fn new(config: &DexConfig) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: CacheManager::new(),
            base_url: config.api_base_url.clone(),
            cache_ttl: config.cache_ttl,
        }
    }

    /// Creates a client with a custom cache manager
    pub fn with_cache(config: &DexConfig, cache_manager: CacheManager) -> Self {
        Self {
            cache_manager: Some(cache_manager),
            ..Self::without_cache(config)
        }
    }

    /// Creates a client that always goes to the network
    pub fn without_cache(config: &DexConfig) -> Self {
        Self {
            http_client: Client::new(),
            cache_manager: None,
            base_url: config.api_base_url.clone(),
            cache_ttl: config.cache_ttl,
        }
    }

    /// Creates the client a run of the binary uses
    ///
    /// With the cache enabled and a cache directory available, expired
    /// entries are pruned first; otherwise the client always goes to the
    /// network.
    pub fn configured(config: &DexConfig, use_cache: bool) -> Self {
        let cache_manager = if use_cache { CacheManager::new() } else { None };
        match cache_manager {
            Some(cache_manager) => {
                match cache_manager.prune_expired() {
                    Ok(removed) => debug!(removed, "pruned expired cache entries"),
                    Err(e) => debug!(error = %e, "failed to prune cache"),
                }
                Self::with_cache(config, cache_manager)
            }
            None => Self::without_cache(config),
        }
    }

    /// Turns an API path into an absolute URL; absolute URLs pass through
    pub fn resolve(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
        }
    }

    /// Fetches a response body, consulting the cache first
    ///
    /// # Returns
    /// * `Ok(String)` - The body of a 200 response with content
    /// * `Err(CatalogError)` - Transport failure, non-200 status, or empty body
    pub async fn get_text(&self, path_or_url: &str) -> Result<String, CatalogError> {
        let url = self.resolve(path_or_url);

        if let Some(ref cache_manager) = self.cache_manager {
            if let Some(body) = cache_manager.read_fresh::<String>(&url) {
                debug!(%url, "cache hit");
                return Ok(body);
            }
        }

        debug!(%url, "requesting");
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        if is_empty_body(&body) {
            return Err(CatalogError::EmptyBody);
        }

        if let Some(ref cache_manager) = self.cache_manager {
            if let Err(e) = cache_manager.write(&url, &body, self.cache_ttl) {
                debug!(%url, error = %e, "failed to cache response");
            }
        }

        Ok(body)
    }

    /// Fetches and decodes a JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path_or_url: &str) -> Result<T, CatalogError> {
        let body = self.get_text(path_or_url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /pokemon-species/{key}` where key is an identifier or a name
    pub async fn species(&self, key: &str) -> Result<SpeciesResponse, CatalogError> {
        self.get_json(&format!("pokemon-species/{}", key)).await
    }

    /// `GET /pokemon/{name}`
    pub async fn pokemon(&self, name: &str) -> Result<PokemonResponse, CatalogError> {
        self.get_json(&format!("pokemon/{}", name)).await
    }

    /// `GET /pokemon-species/?offset=&limit=`
    pub async fn species_page(&self, offset: usize, limit: usize) -> Result<SpeciesPage, CatalogError> {
        self.get_json(&format!("pokemon-species/?offset={}&limit={}", offset, limit))
            .await
    }

    /// `GET <evolution-chain-url>`, returned as untyped JSON
    pub async fn evolution_chain(&self, url: &str) -> Result<serde_json::Value, CatalogError> {
        self.get_json(url).await
    }
}

/// A 200 with nothing (or JSON null) in it counts as no body
fn is_empty_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "null"
}
