//! Catalog paging
//!
//! Grows the store's catalog one fixed-width page at a time, starting each
//! page where the catalog currently ends, until the configured catalog size
//! is reached.

use tracing::{error, info};

use crate::config::DexConfig;
use crate::data::reshape;
use crate::data::{CatalogClient, CatalogEntry, CatalogError};
use crate::store::DexStore;

/// What a page request did to the catalog
#[derive(Debug)]
pub enum PageOutcome {
    /// This many entries were appended (possibly zero)
    Appended(usize),
    /// The catalog is already full; nothing was requested
    Exhausted,
    /// The request failed; nothing was appended
    Failed(CatalogError),
}

/// Appends catalog pages to a store
#[derive(Debug, Clone)]
pub struct Paginator {
    client: CatalogClient,
    image_base_url: String,
    page_size: usize,
    catalog_size: usize,
}

impl Paginator {
    pub fn new(client: CatalogClient, config: &DexConfig) -> Self {
        Self {
            client,
            image_base_url: config.image_base_url.clone(),
            page_size: config.page_size,
            catalog_size: config.catalog_size,
        }
    }

    /// Number of species the catalog grows to
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// Whether the store's catalog has reached the configured size
    pub fn is_exhausted(&self, store: &DexStore) -> bool {
        store.catalog().len() >= self.catalog_size
    }

    /// Requests the page that starts at the end of the current catalog
    pub async fn fetch_next_page(&self, store: &mut DexStore) -> PageOutcome {
        if self.is_exhausted(store) {
            return PageOutcome::Exhausted;
        }

        store.set_loading(true);
        let offset = store.catalog().len();

        let outcome = match self.fetch_page(offset).await {
            Ok(entries) => {
                let count = entries.len();
                store.append_catalog(entries);
                info!(offset, count, total = store.catalog().len(), "catalog page appended");
                PageOutcome::Appended(count)
            }
            Err(e) => {
                error!(offset, error = %e, "failed to load catalog page");
                PageOutcome::Failed(e)
            }
        };

        store.set_loading(false);
        outcome
    }

    /// Fetches one page and annotates each entry with its artwork URL
    async fn fetch_page(&self, offset: usize) -> Result<Vec<CatalogEntry>, CatalogError> {
        let page = self.client.species_page(offset, self.page_size).await?;

        let entries = page
            .results
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, resource)| {
                let id = (offset + index + 1) as u32;
                CatalogEntry {
                    name: resource.name,
                    url: resource.url,
                    image: reshape::image_url(&self.image_base_url, id, ""),
                }
            })
            .collect();

        Ok(entries)
    }
}
