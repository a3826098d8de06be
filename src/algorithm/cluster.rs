//! Growth state of a single region during extraction

use crate::spatial::{BoundingBox, Direction};
use crate::structure::StructureId;

/// What remains after a blocked direction has been removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elimination {
    /// Other directions remain; try the next one
    Retry,
    /// The blocked direction was the last one; growth is over
    Finished,
}

/// Ordered set of directions a cluster may still grow in
///
/// Directions are tried clockwise starting after the last direction that
/// produced a successful claim. A blocked direction is removed for good, so
/// the set only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionCycle {
    active: Vec<Direction>,
    last_success: Direction,
}

impl Default for DirectionCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionCycle {
    /// Full cycle with `Up` as the last success, so `Left` is tried first
    pub fn new() -> Self {
        Self {
            active: Direction::CYCLE.to_vec(),
            last_success: Direction::Up,
        }
    }

    /// Directions still in play, in cycle order
    pub fn active(&self) -> &[Direction] {
        &self.active
    }

    /// Direction that produced the most recent claim
    pub const fn last_success(&self) -> Direction {
        self.last_success
    }

    /// The direction to try next
    pub fn next(&self) -> Direction {
        let cursor = self
            .active
            .iter()
            .position(|&d| d == self.last_success)
            .map_or(0, |i| (i + 1) % self.active.len());
        self.active.get(cursor).copied().unwrap_or(self.last_success)
    }

    /// Record a successful claim in `direction`
    pub const fn succeed(&mut self, direction: Direction) {
        self.last_success = direction;
    }

    /// Remove a blocked direction
    pub fn eliminate(&mut self, direction: Direction) -> Elimination {
        if self.active.len() <= 1 {
            return Elimination::Finished;
        }
        self.active.retain(|&d| d != direction);
        Elimination::Retry
    }
}

/// One growing region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Structure the region will become
    pub id: StructureId,
    /// Seed registration index, used to arbitrate claims
    pub rank: usize,
    /// Cells currently covered
    pub bounds: BoundingBox,
    /// Remaining growth directions
    pub cycle: DirectionCycle,
    /// Growth counter compared against the step budget
    pub steps: usize,
}

impl Cluster {
    /// A 1x1 cluster at `seed` with its counter at `initial_steps`
    pub fn seeded(id: StructureId, rank: usize, seed: [i32; 2], initial_steps: usize) -> Self {
        Self {
            id,
            rank,
            bounds: BoundingBox::point(seed),
            cycle: DirectionCycle::new(),
            steps: initial_steps,
        }
    }
}
