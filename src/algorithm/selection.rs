//! Seed sampling and structure subset selection
//!
//! All randomness goes through a seeded [`SeedSampler`], so a run is fully
//! reproducible from its `u64` seed.

use std::collections::HashSet;

use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::index};

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::TileMap;
use crate::structure::{Structure, StructureId};

/// Seeded random source for seed placement and subset selection
pub struct SeedSampler {
    rng: StdRng,
}

impl SeedSampler {
    /// Create a deterministic sampler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick `count` distinct cells of the map uniformly at random
    ///
    /// Asking for more cells than the map has returns every cell once.
    pub fn sample(&mut self, map: &TileMap, count: usize) -> Vec<[i32; 2]> {
        let (rows, cols) = (map.rows(), map.cols());
        let total = rows * cols;
        index::sample(&mut self.rng, total, count.min(total))
            .into_iter()
            .map(|i| [(i / cols) as i32, (i % cols) as i32])
            .collect()
    }

    /// Weighted random selection over non-negative weights
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 && weight > 0.0 {
                return i;
            }
        }
        weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
    }
}

/// Selection weight of a structure: connectors count double, enemies once
pub fn selection_weight(structure: &Structure) -> f64 {
    (2 * structure.connector_count() + structure.enemy_count()) as f64
}

/// Draw a fraction of the structures without replacement
///
/// `floor(len * fraction)` structures are drawn, each with probability
/// proportional to [`selection_weight`]. Zero-weight structures are never
/// drawn.
///
/// # Errors
///
/// Returns an error if `fraction` is outside `[0, 1]` or there are fewer
/// weighted structures than requested
pub fn select_subset(
    structures: &[Structure],
    fraction: f64,
    sampler: &mut SeedSampler,
) -> Result<Vec<Structure>> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(invalid_parameter(
            "fraction",
            &fraction,
            &"must be between 0 and 1",
        ));
    }

    let wanted = (structures.len() as f64 * fraction).floor() as usize;
    let mut pool: Vec<&Structure> = structures.iter().collect();
    let mut weights: Vec<f64> = pool.iter().map(|s| selection_weight(s)).collect();

    let weighted = weights.iter().filter(|&&w| w > 0.0).count();
    if weighted < wanted {
        return Err(computation_error(
            "select_subset",
            &format!("{wanted} structures requested but only {weighted} have a non-zero weight"),
        ));
    }

    let mut selected = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let choice = sampler.weighted_choice(&weights);
        if choice >= pool.len() {
            break;
        }
        selected.push(pool.swap_remove(choice).clone());
        weights.swap_remove(choice);
    }

    info!("Selected {} of {} structures", selected.len(), structures.len());
    Ok(selected)
}

/// Drop combinable entries that point outside the given structures
///
/// Returns the number of entries removed.
pub fn restrict_combinations(structures: &mut [Structure]) -> usize {
    let kept: HashSet<StructureId> = structures.iter().map(Structure::id).collect();
    let mut removed = 0;
    for structure in structures.iter_mut() {
        for connector in structure.connectors_mut() {
            let before = connector.combinable.len();
            connector
                .combinable
                .retain(|entry| kept.contains(&entry.structure));
            removed += before - connector.combinable.len();
        }
    }
    removed
}
