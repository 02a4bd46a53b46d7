//! Identifier-keyed special cases for species aggregation
//!
//! A handful of species need different treatment than the general pipeline:
//! some list far more varieties than are worth fetching, others publish forms
//! whose artwork is identical. Rather than branching on literal identifiers in
//! the aggregator, those exceptions live in a lookup table injected through
//! configuration.

use std::collections::{HashMap, HashSet};

/// Pikachu lists dozens of cosmetic varieties
const CAPPED_SPECIES: &[(u32, usize)] = &[(25, 6)];

/// Arceus and Silvally forms all share the base artwork
const SINGLE_IMAGE_SPECIES: &[u32] = &[493, 773];

/// Lookup table of per-species exceptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesPolicy {
    /// Maximum number of varieties to fetch, keyed by species identifier
    variant_caps: HashMap<u32, usize>,
    /// Species whose variants get one image with an empty form label
    single_image: HashSet<u32>,
}

impl Default for SpeciesPolicy {
    fn default() -> Self {
        Self {
            variant_caps: CAPPED_SPECIES.iter().copied().collect(),
            single_image: SINGLE_IMAGE_SPECIES.iter().copied().collect(),
        }
    }
}

impl SpeciesPolicy {
    /// A policy with no exceptions at all
    pub fn empty() -> Self {
        Self {
            variant_caps: HashMap::new(),
            single_image: HashSet::new(),
        }
    }

    /// Caps the number of varieties fetched for `species_id`
    pub fn with_variant_cap(mut self, species_id: u32, cap: usize) -> Self {
        self.variant_caps.insert(species_id, cap);
        self
    }

    /// Marks `species_id` as having one shared image for every form
    pub fn with_single_image(mut self, species_id: u32) -> Self {
        self.single_image.insert(species_id);
        self
    }

    /// Variety cap for a species, if one applies
    pub fn variant_cap(&self, species_id: u32) -> Option<usize> {
        self.variant_caps.get(&species_id).copied()
    }

    /// Whether every variant of the species should use the base image
    pub fn uses_single_image(&self, species_id: u32) -> bool {
        self.single_image.contains(&species_id)
    }

    /// Truncates `varieties` in place according to the species cap
    pub fn cap_varieties<T>(&self, species_id: u32, varieties: &mut Vec<T>) {
        if let Some(cap) = self.variant_cap(species_id) {
            varieties.truncate(cap);
        }
    }
}
