//! Region growing: seeds to disjoint rectangular structures
//!
//! Every seed starts a 1x1 cluster. Clusters take turns growing their
//! bounding box one row or column at a time over a shared ownership grid.
//! A step claims the whole new strip or nothing; a strip touching another
//! structure registers a connector pair on both sides, and a strip leaving the
//! map is a plain boundary. Either way the blocked direction is dropped from
//! the cluster for good, which together with the step budget guarantees
//! termination.
//!
//! Turns are taken in rounds, one attempt per live cluster. Attempts within
//! a round can be proposed in any order, but they are committed in seed
//! registration order, so the first claim on a cell always goes to the same
//! cluster no matter how proposals were scheduled.

use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::algorithm::cluster::{Cluster, Elimination};
use crate::io::error::{ChunkError, Result, invalid_parameter};
use crate::spatial::ownership::{Claim, ClaimOutcome, Collision, OwnershipGrid};
use crate::spatial::{BoundingBox, Direction, TileClassifier, TileMap};
use crate::structure::{Structure, StructureId, StructureIdAllocator};

/// Connector position produced by a collision, before materialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorPlacement {
    /// Structure receiving the connector
    pub structure: StructureId,
    /// Cell of the connector
    pub position: [i32; 2],
    /// Side of the structure that was blocked
    pub direction: Direction,
}

/// Why a cluster stopped growing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every direction was blocked
    Finished,
    /// The step budget ran out
    Exhausted,
}

/// Final extent of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalBounds {
    /// Structure the cluster became
    pub id: StructureId,
    /// Cells covered when growth stopped
    pub bounds: BoundingBox,
    /// How growth stopped
    pub termination: Termination,
}

/// Everything the claim phase produces
#[derive(Debug, Clone)]
pub struct GrowthOutcome {
    /// Structure ids in seed registration order
    pub ids: Vec<StructureId>,
    /// Cell ownership after all clusters stopped
    pub ownership: OwnershipGrid,
    /// Connector placements in generation order
    pub placements: Vec<ConnectorPlacement>,
    /// Final extent of every cluster, ordered by id
    pub final_bounds: Vec<FinalBounds>,
}

/// One attempt of one cluster within a round
struct Proposal {
    cluster: Cluster,
    /// `None` once the step budget is spent
    direction: Option<Direction>,
}

/// Expands seeds into structures over a tile map
pub struct RegionGrower<'a> {
    map: &'a TileMap,
    classifier: &'a TileClassifier,
    expansion: usize,
    visit_order: Option<Vec<usize>>,
}

impl<'a> RegionGrower<'a> {
    /// Create a grower with expansion parameter `expansion` (D)
    pub const fn new(map: &'a TileMap, classifier: &'a TileClassifier, expansion: usize) -> Self {
        Self {
            map,
            classifier,
            expansion,
            visit_order: None,
        }
    }

    /// Propose attempts in this seed order each round instead of seed order
    ///
    /// `order` must be a permutation of the seed indices. It only changes the
    /// order in which attempts are prepared; the outcome is unaffected.
    #[must_use]
    pub fn with_visit_order(mut self, order: Vec<usize>) -> Self {
        self.visit_order = Some(order);
        self
    }

    /// Counter value beyond which a cluster is dropped
    pub const fn step_budget(&self) -> usize {
        4 * self.expansion
    }

    /// Grow the seeds and build structures from the result
    ///
    /// # Errors
    ///
    /// Returns an error if a seed lies outside the map, two seeds share a
    /// cell, or the visit order is not a permutation of the seeds
    pub fn extract(
        &self,
        seeds: &[[i32; 2]],
        ids: &mut StructureIdAllocator,
    ) -> Result<Vec<Structure>> {
        let outcome = self.grow(seeds, ids)?;
        Ok(self.materialize(&outcome))
    }

    /// Claim phase: grow every seed until all clusters have stopped
    ///
    /// # Errors
    ///
    /// Returns an error if a seed lies outside the map, two seeds share a
    /// cell, or the visit order is not a permutation of the seeds
    pub fn grow(
        &self,
        seeds: &[[i32; 2]],
        ids: &mut StructureIdAllocator,
    ) -> Result<GrowthOutcome> {
        self.validate(seeds)?;

        let mut session = GrowthSession::new(self.map.rows(), self.map.cols());
        let mut live = Vec::with_capacity(seeds.len());

        for (rank, &seed) in seeds.iter().enumerate() {
            let id = ids.allocate();
            let tile = self.map.get(seed)?;
            session.grid.insert(seed, Claim { tile, owner: id });
            session.ids.push(id);
            debug!("Seed {id} placed at ({}, {})", seed[0], seed[1]);
            live.push(Cluster::seeded(id, rank, seed, self.expansion));
        }

        let priority = self.visit_priority(seeds.len());
        let mut rounds = 0usize;

        while !live.is_empty() {
            rounds += 1;
            live.sort_by_key(|c| priority.get(c.rank).copied().unwrap_or(c.rank));

            let mut proposals: Vec<Proposal> =
                live.into_iter().map(|c| self.propose(c)).collect();
            proposals.sort_by_key(|p| p.cluster.rank);

            live = proposals
                .into_iter()
                .filter_map(|p| session.commit(self.map, p))
                .collect();
        }

        session.final_bounds.sort_by_key(|f| f.id);
        info!(
            "Grew {} seeds in {rounds} rounds, {} connectors placed",
            seeds.len(),
            session.placements.len()
        );

        Ok(GrowthOutcome {
            ids: session.ids,
            ownership: session.grid,
            placements: session.placements,
            final_bounds: session.final_bounds,
        })
    }

    /// Materialize phase: turn claimed cells and placements into structures
    ///
    /// Cells are visited row-major. Structures are returned in seed order,
    /// including any that ended up with no nodes.
    pub fn materialize(&self, outcome: &GrowthOutcome) -> Vec<Structure> {
        let mut structures: Vec<Structure> =
            outcome.ids.iter().map(|&id| Structure::new(id)).collect();
        let slots: HashMap<StructureId, usize> = outcome
            .ids
            .iter()
            .enumerate()
            .map(|(slot, &id)| (id, slot))
            .collect();

        for (position, claim) in outcome.ownership.claims() {
            if let Some(structure) = slots
                .get(&claim.owner)
                .and_then(|&slot| structures.get_mut(slot))
            {
                structure.push_node(position, claim.tile, self.classifier);
            }
        }

        for placement in &outcome.placements {
            if let Some(structure) = slots
                .get(&placement.structure)
                .and_then(|&slot| structures.get_mut(slot))
            {
                structure.push_connector(placement.position, placement.direction);
            }
        }

        structures
    }

    fn propose(&self, cluster: Cluster) -> Proposal {
        let direction = (cluster.steps <= self.step_budget()).then(|| cluster.cycle.next());
        Proposal { cluster, direction }
    }

    fn validate(&self, seeds: &[[i32; 2]]) -> Result<()> {
        let mut seen = HashSet::with_capacity(seeds.len());
        for &seed in seeds {
            if !self.map.contains(seed) {
                return Err(ChunkError::InvalidSeed {
                    position: seed,
                    dimensions: (self.map.rows(), self.map.cols()),
                });
            }
            if !seen.insert(seed) {
                return Err(ChunkError::DuplicateSeed { position: seed });
            }
        }

        if let Some(order) = &self.visit_order {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            if !sorted.iter().copied().eq(0..seeds.len()) {
                return Err(invalid_parameter(
                    "visit_order",
                    &format!("{order:?}"),
                    &format!("must be a permutation of 0..{}", seeds.len()),
                ));
            }
        }
        Ok(())
    }

    /// Rank-indexed priority used to order proposals
    fn visit_priority(&self, seed_count: usize) -> Vec<usize> {
        let mut priority: Vec<usize> = (0..seed_count).collect();
        if let Some(order) = &self.visit_order {
            for (position, &rank) in order.iter().enumerate() {
                if let Some(slot) = priority.get_mut(rank) {
                    *slot = position;
                }
            }
        }
        priority
    }
}

/// Mutable state shared by all clusters during the claim phase
struct GrowthSession {
    grid: OwnershipGrid,
    ids: Vec<StructureId>,
    placements: Vec<ConnectorPlacement>,
    paired: HashSet<(StructureId, StructureId)>,
    final_bounds: Vec<FinalBounds>,
}

impl GrowthSession {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: OwnershipGrid::new(rows, cols),
            ids: Vec::new(),
            placements: Vec::new(),
            paired: HashSet::new(),
            final_bounds: Vec::new(),
        }
    }

    /// Apply one attempt; returns the cluster if it should keep growing
    fn commit(&mut self, map: &TileMap, proposal: Proposal) -> Option<Cluster> {
        let Proposal {
            mut cluster,
            direction,
        } = proposal;

        let Some(direction) = direction else {
            debug!("Structure {} exhausted its step budget", cluster.id);
            self.stop(&cluster, Termination::Exhausted);
            return None;
        };

        let frontier = cluster.bounds.frontier(direction);
        let outcome = self.grid.try_claim(&frontier, cluster.id, |p| {
            map.get(p).unwrap_or_else(|_| map.filler())
        });

        match outcome {
            ClaimOutcome::Claimed => {
                cluster.bounds = cluster.bounds.extended(direction);
                cluster.cycle.succeed(direction);
                cluster.steps += 1;
                Some(cluster)
            }
            ClaimOutcome::Boundary => {
                debug!("Structure {} hit the map edge going {direction}", cluster.id);
                self.block(cluster, direction)
            }
            ClaimOutcome::Collided(collisions) => {
                for collision in collisions {
                    self.pair(cluster.id, collision, direction);
                }
                self.block(cluster, direction)
            }
        }
    }

    /// Register a connector on both sides of a first contact
    fn pair(&mut self, id: StructureId, collision: Collision, direction: Direction) {
        let Collision { other, position } = collision;
        let key = if id < other { (id, other) } else { (other, id) };
        if !self.paired.insert(key) {
            return;
        }

        let mirrored = direction.opposite().step(position);
        debug!(
            "Structure {id} met {other} at ({}, {}) going {direction}",
            position[0], position[1]
        );

        self.placements.push(ConnectorPlacement {
            structure: id,
            position,
            direction,
        });
        self.placements.push(ConnectorPlacement {
            structure: other,
            position: mirrored,
            direction: direction.opposite(),
        });
    }

    fn block(&mut self, mut cluster: Cluster, direction: Direction) -> Option<Cluster> {
        match cluster.cycle.eliminate(direction) {
            Elimination::Retry => Some(cluster),
            Elimination::Finished => {
                debug!("Structure {} finished expansion", cluster.id);
                self.stop(&cluster, Termination::Finished);
                None
            }
        }
    }

    fn stop(&mut self, cluster: &Cluster, termination: Termination) {
        self.final_bounds.push(FinalBounds {
            id: cluster.id,
            bounds: cluster.bounds,
            termination,
        });
    }
}
