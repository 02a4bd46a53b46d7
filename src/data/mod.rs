//! Core data models for the Pokédex
//!
//! This module contains the records the UI renders (species, variants, stats,
//! images, catalog entries) together with the API shapes, the HTTP client and
//! the reshaping rules that produce them.

pub mod api;
pub mod client;
pub mod policy;
pub mod reshape;

pub use api::{NamedResource, TypeSlot, Variety};
pub use client::{CatalogClient, CatalogError};
pub use policy::SpeciesPolicy;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Evolution chain exactly as the API returned it
pub type EvolutionChain = Value;

/// The chain attached when none could be fetched
pub fn empty_chain() -> EvolutionChain {
    Value::Array(Vec::new())
}

/// Whether a chain carries any data
pub fn chain_is_empty(chain: &EvolutionChain) -> bool {
    match chain {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// Everything the detail view shows about one species
///
/// Built fresh on every fetch and never merged with an earlier record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// National Pokédex number
    pub id: u32,
    /// Canonical (API) name
    pub name: String,
    /// Japanese name, or the canonical name when there is none
    pub display_name: String,
    /// English genus, e.g. "Seed Pokémon", or empty
    pub category: String,
    /// Unique English Pokédex entries, each on a single line
    pub descriptions: Vec<String>,
    /// Color name, with "white" remapped to a light gray
    pub color: String,
    /// Variety references after any policy cap was applied
    pub varieties: Vec<Variety>,
    /// Link to the evolution chain resource
    pub evolution_chain_url: String,
    /// Base artwork of the species
    pub default_image: String,
    /// One record per successfully fetched variety, in variety order
    pub data: Vec<VariantRecord>,
    /// Verbatim evolution chain, or an empty array
    pub evo: EvolutionChain,
}

/// One physical form of a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub name: String,
    /// Centimetres, two decimals, e.g. "70.00 cm"
    pub height: String,
    /// Kilograms, two decimals, e.g. "6.90 kg"
    pub weight: String,
    pub types: Vec<TypeSlot>,
    /// Ability names, last API ability first
    pub abilities: String,
    /// Base stats, last API stat first
    pub stats: Vec<StatEntry>,
    pub images: Vec<FormImage>,
    pub total_stats: u32,
    pub highest_stat: u32,
}

/// A named base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
}

/// Artwork for one form of a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormImage {
    /// Suffix after the species name, e.g. "-alola"; empty for the base form
    pub form_name: String,
    pub image: String,
}

/// One row of the accumulated catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Species resource URL
    pub url: String,
    /// Artwork derived from the entry's position in the catalog
    pub image: String,
}

impl CatalogEntry {
    /// Identifier parsed from the trailing segment of the species URL
    pub fn species_id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}
