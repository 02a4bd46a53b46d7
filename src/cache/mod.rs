//! Cache module for storing catalog responses to disk
//!
//! This module provides a cache manager that persists response bodies to the
//! filesystem with a time-to-live, so repeated requests inside the cache window
//! never reach the network.

mod manager;

pub use manager::{CacheManager, CachedData};
