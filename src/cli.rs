//! Command-line interface parsing for the Pokédex
//!
//! This module handles parsing of CLI arguments using clap: where the catalog
//! and artwork live, how long responses are cached, and whether to open the
//! browser on a species (`--show`) or print one record as JSON (`--dump`).

use chrono::Duration;
use clap::Parser;
use thiserror::Error;

use crate::config::{DexConfig, DEFAULT_API_BASE_URL, DEFAULT_CACHE_MINUTES, DEFAULT_IMAGE_BASE_URL};

/// Error types for CLI argument parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The species argument is neither a positive identifier nor a species name
    #[error("Invalid species: '{0}'. Use a Pokédex number (e.g. 25) or a name (e.g. pikachu, mr-mime)")]
    InvalidSpecies(String),
}

/// Pokédex - browse species, forms, stats and evolution chains from PokéAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse PokéAPI species, forms, stats and evolution chains")]
#[command(version)]
pub struct Cli {
    /// Open directly on a species record
    ///
    /// Examples:
    ///   pokedex --show 25        # Open on Pikachu
    ///   pokedex --show eevee     # Open on Eevee
    #[arg(long, value_name = "SPECIES", conflicts_with = "dump")]
    pub show: Option<String>,

    /// Print the assembled record of a species as JSON and exit
    #[arg(long, value_name = "SPECIES")]
    pub dump: Option<String>,

    /// Catalog API base URL
    #[arg(long, value_name = "URL", env = "POKEDEX_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Artwork base URL
    #[arg(long, value_name = "URL", env = "POKEDEX_IMAGE_URL", default_value = DEFAULT_IMAGE_BASE_URL)]
    pub image_url: String,

    /// Minutes a response is reused before asking the API again
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_CACHE_MINUTES)]
    pub cache_minutes: u32,

    /// Always go to the network, never read or write the response cache
    #[arg(long)]
    pub no_cache: bool,
}

/// What the binary should do once configured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StartupMode {
    /// Open the catalog list
    #[default]
    Browse,
    /// Open the catalog list, then jump to this species
    Show(String),
    /// Print this species as JSON and exit
    Dump(String),
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub dex: DexConfig,
    /// Whether the response cache is enabled
    pub use_cache: bool,
}

/// Normalizes a species argument into the key used in API paths.
///
/// # Arguments
/// * `s` - The species string from CLI
///
/// # Returns
/// * `Ok(String)` with a positive identifier or a lowercase name
/// * `Err(CliError::InvalidSpecies)` if the string is neither
pub fn parse_species_key(s: &str) -> Result<String, CliError> {
    let key = s.trim().to_lowercase();
    let invalid = || CliError::InvalidSpecies(s.to_string());

    if key.is_empty() {
        return Err(invalid());
    }

    if key.chars().all(|c| c.is_ascii_digit()) {
        return match key.parse::<u32>() {
            Ok(id) if id > 0 => Ok(id.to_string()),
            _ => Err(invalid()),
        };
    }

    let valid_name = key
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !key.starts_with('-')
        && !key.ends_with('-');

    if valid_name {
        Ok(key)
    } else {
        Err(invalid())
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a species argument is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mode = match (&cli.show, &cli.dump) {
            (_, Some(species)) => StartupMode::Dump(parse_species_key(species)?),
            (Some(species), None) => StartupMode::Show(parse_species_key(species)?),
            (None, None) => StartupMode::Browse,
        };

        let dex = DexConfig::default()
            .with_api_base_url(cli.api_url.as_str())
            .with_image_base_url(cli.image_url.as_str())
            .with_cache_ttl(Duration::minutes(i64::from(cli.cache_minutes)));

        Ok(StartupConfig {
            mode,
            dex,
            use_cache: !cli.no_cache && cli.cache_minutes > 0,
        })
    }
}
