//! JSON bodies shaped like the PokéAPI responses, plus a mock server setup

#![allow(dead_code)]

use pokedex::config::DexConfig;
use pokedex::data::CatalogClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const IMAGE_BASE: &str = "https://img.test";

pub fn config_for(server: &MockServer) -> DexConfig {
    DexConfig::default()
        .with_api_base_url(server.uri())
        .with_image_base_url(IMAGE_BASE)
}

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::without_cache(&config_for(server))
}

pub fn evolution_url(server: &MockServer, chain_id: u32) -> String {
    format!("{}/evolution-chain/{}/", server.uri(), chain_id)
}

/// A species with the given varieties; the first one is the default
pub fn species_body(id: u32, name: &str, varieties: &[&str], evolution_url: &str) -> Value {
    let varieties: Vec<Value> = varieties
        .iter()
        .enumerate()
        .map(|(i, variety)| {
            json!({
                "is_default": i == 0,
                "pokemon": {"name": variety, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", variety)}
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "names": [
            {"name": format!("{}-en", name), "language": {"name": "en", "url": ""}},
            {"name": format!("{}-ja", name), "language": {"name": "ja", "url": ""}}
        ],
        "genera": [
            {"genus": "Test Pokémon", "language": {"name": "en", "url": ""}},
            {"genus": "Testo", "language": {"name": "fr", "url": ""}}
        ],
        "flavor_text_entries": [
            {"flavor_text": "A strange seed was\nplanted on its\u{000c}back.", "language": {"name": "en", "url": ""}},
            {"flavor_text": "A strange seed was planted\non its back.", "language": {"name": "en", "url": ""}},
            {"flavor_text": "Une graine.", "language": {"name": "fr", "url": ""}},
            {"flavor_text": "It grows with\n\nthe sun.", "language": {"name": "en", "url": ""}}
        ],
        "color": {"name": "green", "url": ""},
        "varieties": varieties,
        "evolution_chain": {"url": evolution_url}
    })
}

/// A variant with two forms and three stats
pub fn pokemon_body(name: &str) -> Value {
    json!({
        "name": name,
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": ""}},
            {"slot": 2, "type": {"name": "poison", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false},
            {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true}
        ],
        "stats": [
            {"base_stat": 45, "stat": {"name": "speed", "url": ""}},
            {"base_stat": 65, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 45, "stat": {"name": "hp", "url": ""}}
        ],
        "forms": [
            {"name": name, "url": ""},
            {"name": format!("{}-mega", name), "url": ""}
        ]
    })
}

pub fn evolution_body(stages: &[&str]) -> Value {
    let mut link = json!({"species": {"name": stages[stages.len() - 1]}, "evolves_to": []});
    for name in stages.iter().rev().skip(1) {
        link = json!({"species": {"name": name}, "evolves_to": [link]});
    }
    json!({"id": 1, "chain": link})
}

/// One catalog page of `count` entries numbered from `offset + 1`
pub fn page_body(offset: usize, count: usize) -> Value {
    let results: Vec<Value> = (offset..offset + count)
        .map(|i| {
            json!({
                "name": format!("species-{}", i + 1),
                "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", i + 1)
            })
        })
        .collect();
    json!({"count": 807, "results": results})
}
