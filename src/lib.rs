//! Pokédex library
//!
//! Exposes the catalog state layer (store, aggregator, paginator), the API
//! client and cache, and the terminal UI used by the `pokedex` binary and the
//! integration tests.

pub mod aggregator;
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod paginator;
pub mod store;
pub mod ui;

pub use aggregator::{Aggregator, FetchOutcome};
pub use paginator::{PageOutcome, Paginator};
pub use store::DexStore;
