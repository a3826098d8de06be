//! Connector matching: which structures can be joined, and where
//!
//! For each canonical connector (facing right or up) on one structure, every
//! opposite-facing connector on another structure is tried. The second
//! structure is moved so its connector sits on the cell next to the first
//! one, clipped to the map, and the pair is accepted when the two structures
//! don't overlap and the first can jump onto the second. Accepted pairs are
//! recorded on both connectors.
//!
//! Trials only read finalized structures, so they are evaluated in parallel;
//! results are merged serially in the same order a sequential scan would
//! produce them.

use log::{debug, info};
use rayon::prelude::*;

use crate::algorithm::reachability::{ReachabilityAnalyzer, ReachabilityConfig};
use crate::io::configuration::MAP_ROWS;
use crate::spatial::Direction;
use crate::spatial::mask::CellMask;
use crate::structure::{Connector, ConnectorRef, Structure, TranslatedView};

/// Matching parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Rows of the map candidates are clipped to
    pub rows: i32,
    /// Evaluate trials on the rayon pool
    pub parallel: bool,
    /// Jump reach used for the reachability test
    pub reach: ReachabilityConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: MAP_ROWS as i32,
            parallel: true,
            reach: ReachabilityConfig::default(),
        }
    }
}

/// A connector pair worth a trial alignment, by slice index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    first: usize,
    first_connector: usize,
    second: usize,
    second_connector: usize,
}

/// Computes the combinability relation over a set of structures
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinationMatcher {
    config: MatchConfig,
    analyzer: ReachabilityAnalyzer,
}

impl CombinationMatcher {
    /// Create a matcher
    pub const fn new(config: MatchConfig) -> Self {
        Self {
            config,
            analyzer: ReachabilityAnalyzer::new(config.reach),
        }
    }

    /// Parameters in use
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Populate every connector's `combinable` list
    ///
    /// Returns the number of pairs recorded. Each pair is written on both
    /// connectors.
    pub fn compute_combinations(&self, structures: &mut [Structure]) -> usize {
        let accepted = self.accepted(structures);

        for candidate in &accepted {
            let first = reference(structures, candidate.first, candidate.first_connector);
            let second = reference(structures, candidate.second, candidate.second_connector);
            if let (Some(first), Some(second)) = (first, second) {
                push_combinable(structures, candidate.first, candidate.first_connector, second);
                push_combinable(structures, candidate.second, candidate.second_connector, first);
            }
        }

        info!(
            "Recorded {} combinable pairs across {} structures",
            accepted.len(),
            structures.len()
        );
        accepted.len()
    }

    /// Every accepted pair, in sequential scan order, without recording it
    pub fn accepted_pairs(&self, structures: &[Structure]) -> Vec<(ConnectorRef, ConnectorRef)> {
        self.accepted(structures)
            .into_iter()
            .filter_map(|c| {
                Some((
                    reference(structures, c.first, c.first_connector)?,
                    reference(structures, c.second, c.second_connector)?,
                ))
            })
            .collect()
    }

    fn accepted(&self, structures: &[Structure]) -> Vec<Candidate> {
        let candidates = Self::candidates(structures);
        let masks: Vec<CellMask> = structures
            .iter()
            .map(|s| CellMask::from_positions(s.nodes().iter().map(|n| n.position)))
            .collect();

        let evaluate = |candidate: &Candidate| -> Option<Candidate> {
            let s1 = structures.get(candidate.first)?;
            let s2 = structures.get(candidate.second)?;
            let n1 = s1.connectors().get(candidate.first_connector)?;
            let n2 = s2.connectors().get(candidate.second_connector)?;
            let mask = masks.get(candidate.first)?;
            self.are_combinable_masked(s1, mask, n1, s2, n2)
                .then_some(*candidate)
        };

        if self.config.parallel {
            candidates.par_iter().filter_map(evaluate).collect()
        } else {
            candidates.iter().filter_map(evaluate).collect()
        }
    }

    /// Trial-align `s2` on `n1` through `n2` and test overlap and reach
    pub fn are_combinable(
        &self,
        s1: &Structure,
        n1: &Connector,
        s2: &Structure,
        n2: &Connector,
    ) -> bool {
        let mask = CellMask::from_positions(s1.nodes().iter().map(|n| n.position));
        self.are_combinable_masked(s1, &mask, n1, s2, n2)
    }

    /// The view of `s2` that places `n2` next to `n1`
    pub fn aligned_view<'s>(
        &self,
        n1: &Connector,
        s2: &'s Structure,
        n2: &Connector,
    ) -> TranslatedView<'s> {
        let target = n1.direction.step(n1.position);
        let offset = TranslatedView::aligning(n2.position, target);
        TranslatedView::new(s2, offset, self.config.rows)
    }

    fn are_combinable_masked(
        &self,
        s1: &Structure,
        s1_mask: &CellMask,
        n1: &Connector,
        s2: &Structure,
        n2: &Connector,
    ) -> bool {
        let view = self.aligned_view(n1, s2, n2);

        if s1_mask.intersects(view.nodes().map(|n| n.position)) {
            debug!(
                "Structures {} and {} overlap when joined at connectors {} and {}",
                s1.id(),
                s2.id(),
                n1.id,
                n2.id
            );
            return false;
        }

        self.analyzer
            .structures_reachable(s1.nodes().iter().copied(), view.nodes())
    }

    /// Connector pairs that pass the direction and row filters
    fn candidates(structures: &[Structure]) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for (first, s1) in structures.iter().enumerate() {
            for (first_connector, n1) in s1.connectors().iter().enumerate() {
                if !n1.direction.is_canonical() {
                    continue;
                }
                let opposite = n1.direction.opposite();

                for (second, s2) in structures.iter().enumerate() {
                    if s1.id() == s2.id() {
                        continue;
                    }
                    for (second_connector, n2) in s2.connectors().iter().enumerate() {
                        if n2.direction != opposite {
                            continue;
                        }
                        if opposite == Direction::Down || n1.position[0] == n2.position[0] {
                            candidates.push(Candidate {
                                first,
                                first_connector,
                                second,
                                second_connector,
                            });
                        }
                    }
                }
            }
        }
        candidates
    }
}

fn reference(structures: &[Structure], index: usize, connector: usize) -> Option<ConnectorRef> {
    structures
        .get(index)
        .and_then(|s| s.connector(connector))
        .map(Connector::reference)
}

fn push_combinable(
    structures: &mut [Structure],
    index: usize,
    connector: usize,
    entry: ConnectorRef,
) {
    if let Some(connector) = structures
        .get_mut(index)
        .and_then(|s| s.connector_mut(connector))
    {
        connector.combinable.push(entry);
    }
}
