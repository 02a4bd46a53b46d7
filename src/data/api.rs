//! Response shapes of the PokéAPI endpoints
//!
//! Only the fields the aggregator and paginator read are modelled; everything
//! else in the payloads is ignored by serde. Missing required fields surface as
//! decode errors in the catalog client.

use serde::{Deserialize, Serialize};

/// A `{name, url}` pair as used throughout the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A bare `{url}` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// Localized species name
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// Localized species category, e.g. "Seed Pokémon"
#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// Pokédex entry text from one game version
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Reference from a species to one of its varieties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,
    pub names: Vec<LocalizedName>,
    pub genera: Vec<Genus>,
    pub flavor_text_entries: Vec<FlavorText>,
    pub color: NamedResource,
    pub varieties: Vec<Variety>,
    pub evolution_chain: ApiResource,
}

/// One of a variant's types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One of a variant's abilities
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// One of a variant's base stats
#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    pub forms: Vec<NamedResource>,
}

/// `GET /pokemon-species/?offset=&limit=`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesPage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<NamedResource>>,
}
