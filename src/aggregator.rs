//! Full-record aggregation
//!
//! Assembles one species record from a chain of dependent requests: the
//! species itself, each of its varieties one at a time, then the evolution
//! chain. The result always replaces whatever record the store held before,
//! including with nothing when the fetch did not produce a record.

use tracing::{debug, error, info, warn};

use crate::config::DexConfig;
use crate::data::reshape::{self, VariantContext};
use crate::data::{
    chain_is_empty, empty_chain, CatalogClient, CatalogError, EvolutionChain, SpeciesPolicy,
    SpeciesRecord,
};
use crate::store::DexStore;

/// What a record fetch produced
#[derive(Debug)]
pub enum FetchOutcome {
    /// The record was assembled and committed to the store
    Found(SpeciesRecord),
    /// The API has no such species
    NotFound,
    /// The fetch broke part way; no record was committed
    Failed(CatalogError),
}

impl FetchOutcome {
    /// The assembled record, if any
    pub fn record(&self) -> Option<&SpeciesRecord> {
        match self {
            FetchOutcome::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FetchOutcome::Found(_))
    }
}

/// Builds species records from the catalog API
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: CatalogClient,
    image_base_url: String,
    policy: SpeciesPolicy,
}

impl Aggregator {
    pub fn new(client: CatalogClient, config: &DexConfig) -> Self {
        Self {
            client,
            image_base_url: config.image_base_url.clone(),
            policy: config.policy.clone(),
        }
    }

    /// Fetches the full record for `key` (identifier or name) into the store
    ///
    /// Sets the loading flag, assembles the record, then commits the outcome:
    /// the store's record becomes the new record on success and `None` on any
    /// other outcome, and the loading flag is cleared last.
    pub async fn fetch_full_record(&self, store: &mut DexStore, key: &str) -> FetchOutcome {
        store.set_loading(true);

        let outcome = match self.assemble(key).await {
            Ok(Some(record)) => {
                info!(id = record.id, name = %record.name, variants = record.data.len(), "record assembled");
                FetchOutcome::Found(record)
            }
            Ok(None) => {
                info!(%key, "species not found");
                FetchOutcome::NotFound
            }
            Err(e) => {
                error!(%key, error = %e, "species fetch failed");
                FetchOutcome::Failed(e)
            }
        };

        store.replace_record(outcome.record().cloned());
        store.set_loading(false);
        outcome
    }

    /// Runs the request pipeline without touching any store
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The assembled record
    /// * `Ok(None)` - The species request came back non-200 or empty
    /// * `Err(CatalogError)` - Transport failure on the species or evolution request, or a decode failure on the species
    pub async fn assemble(&self, key: &str) -> Result<Option<SpeciesRecord>, CatalogError> {
        let species = match self.client.species(key).await {
            Ok(species) => species,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let id = species.id;
        let mut varieties = species.varieties;
        self.policy.cap_varieties(id, &mut varieties);

        let mut record = SpeciesRecord {
            id,
            display_name: reshape::localized_name(&species.names, &species.name),
            category: reshape::category(&species.genera),
            descriptions: reshape::descriptions(&species.flavor_text_entries),
            color: reshape::display_color(&species.color.name),
            evolution_chain_url: species.evolution_chain.url,
            default_image: reshape::image_url(&self.image_base_url, id, ""),
            name: species.name,
            varieties,
            data: Vec::new(),
            evo: empty_chain(),
        };

        let ctx = VariantContext {
            species_id: id,
            species_name: &record.name,
            image_base_url: &self.image_base_url,
            single_image: self.policy.uses_single_image(id),
        };

        let mut data = Vec::with_capacity(record.varieties.len());
        for variety in &record.varieties {
            let name = &variety.pokemon.name;
            match self.client.pokemon(name).await {
                Ok(response) => {
                    debug!(species = id, variant = %name, "variant fetched");
                    data.push(reshape::build_variant(response, &ctx));
                }
                Err(e) => {
                    warn!(species = id, variant = %name, error = %e, "skipping variant");
                }
            }
        }
        record.data = data;
        record.evo = self.evolution_chain(&record.evolution_chain_url).await?;

        Ok(Some(record))
    }

    /// Fetches the chain at `url`; an absent, empty or unreadable chain is not an error
    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, CatalogError> {
        let body = match self.client.evolution_chain(url).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => {
                debug!(%url, error = %e, "no evolution chain");
                return Ok(empty_chain());
            }
            Err(CatalogError::Decode(e)) => {
                warn!(%url, error = %e, "evolution chain body is not JSON");
                return Ok(empty_chain());
            }
            Err(e) => return Err(e),
        };

        match body.get("chain") {
            Some(chain) if !chain_is_empty(chain) => Ok(chain.clone()),
            _ => Ok(empty_chain()),
        }
    }
}
