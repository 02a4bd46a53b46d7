//! Observable state shared between the components and the UI
//!
//! The store is owned by the caller and handed to the aggregator and paginator
//! by `&mut`. Only those two components mutate it; everyone else reads.

use crate::data::{CatalogEntry, SpeciesRecord};

/// Catalog list, current record and loading flag
#[derive(Debug, Clone, Default)]
pub struct DexStore {
    /// Grows by whole pages, never shrinks or reorders
    catalog: Vec<CatalogEntry>,
    /// Replaced wholesale after every record fetch
    record: Option<SpeciesRecord>,
    loading: bool,
}

impl DexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Species loaded so far, in catalog order
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Result of the most recent record fetch
    pub fn record(&self) -> Option<&SpeciesRecord> {
        self.record.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn replace_record(&mut self, record: Option<SpeciesRecord>) {
        self.record = record;
    }

    pub(crate) fn append_catalog(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        self.catalog.extend(entries);
    }
}
