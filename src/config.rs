//! Runtime configuration for the Pokédex
//!
//! Everything the components need to know about the outside world: where the
//! catalog API and the image server live, how long responses are reused, the
//! page width and catalog size used by the paginator, and the species policy.
//! Defaults match the public PokéAPI deployment; the CLI can override them.

use chrono::Duration;

use crate::data::SpeciesPolicy;

/// Base URL of the public catalog API
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Base URL of the static artwork repository
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.github.com/billysillano/pokemon-assets/master/images";

/// How long a successful response is reused, in minutes
pub const DEFAULT_CACHE_MINUTES: u32 = 15;

/// Number of species requested per catalog page
pub const PAGE_SIZE: usize = 30;

/// Number of species the catalog is allowed to grow to
pub const CATALOG_SIZE: usize = 807;

/// Configuration shared by the catalog client, aggregator and paginator
#[derive(Debug, Clone)]
pub struct DexConfig {
    /// Catalog API base URL, without a trailing slash
    pub api_base_url: String,
    /// Image server base URL, without a trailing slash
    pub image_base_url: String,
    /// Cache window for successful responses
    pub cache_ttl: Duration,
    /// Entries requested per catalog page
    pub page_size: usize,
    /// Catalog length at which paging stops
    pub catalog_size: usize,
    /// Per-species exceptions
    pub policy: SpeciesPolicy,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            cache_ttl: Duration::minutes(i64::from(DEFAULT_CACHE_MINUTES)),
            page_size: PAGE_SIZE,
            catalog_size: CATALOG_SIZE,
            policy: SpeciesPolicy::default(),
        }
    }
}

impl DexConfig {
    /// Overrides the catalog API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = trim_base(url.into());
        self
    }

    /// Overrides the image server base URL
    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = trim_base(url.into());
        self
    }

    /// Overrides the cache window
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Replaces the species policy
    pub fn with_policy(mut self, policy: SpeciesPolicy) -> Self {
        self.policy = policy;
        self
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
