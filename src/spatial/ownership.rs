//! Transient per-cell ownership used while regions grow
//!
//! Each cell is either unclaimed or remembers the tile it was claimed with and
//! the structure that claimed it. Claims are permanent: the grid offers no way
//! to release or reassign a cell.

use ndarray::Array2;

use crate::spatial::bounds::BoundingBox;
use crate::structure::StructureId;

/// Tile and owner recorded when a cell is claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    /// Tile symbol copied from the map
    pub tile: char,
    /// Structure that owns the cell
    pub owner: StructureId,
}

/// Result of scanning a rectangle for foreign claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// All cells were free or already ours, and are now ours
    Claimed,
    /// Part of the rectangle lies outside the grid
    Boundary,
    /// Cells owned by other structures, one entry per owner
    Collided(Vec<Collision>),
}

/// First cell found owned by another structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Structure that already owns the cell
    pub other: StructureId,
    /// Position of that cell
    pub position: [i32; 2],
}

/// Ownership grid with the same dimensions as the source map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipGrid {
    cells: Array2<Option<Claim>>,
}

impl OwnershipGrid {
    /// Create an unclaimed grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, position: [i32; 2]) -> bool {
        Self::index(position).is_some_and(|index| self.cells.get(index).is_some())
    }

    /// Claim recorded at a position, if any
    pub fn claim_at(&self, position: [i32; 2]) -> Option<Claim> {
        Self::index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
            .flatten()
    }

    /// Owner of a position, if claimed
    pub fn owner(&self, position: [i32; 2]) -> Option<StructureId> {
        self.claim_at(position).map(|claim| claim.owner)
    }

    /// Unconditionally record a claim; out-of-grid positions are ignored
    pub fn insert(&mut self, position: [i32; 2], claim: Claim) {
        if let Some(cell) = Self::index(position).and_then(|index| self.cells.get_mut(index)) {
            *cell = Some(claim);
        }
    }

    /// Claim every free cell of `area` for `owner`, all or nothing
    ///
    /// Cells are scanned row-major. Any cell owned by a different structure is
    /// a collision; only the first cell found per foreign owner is reported.
    /// Nothing is claimed unless the scan finds no collision. `tile_at`
    /// supplies the symbol recorded for newly claimed cells.
    pub fn try_claim(
        &mut self,
        area: &BoundingBox,
        owner: StructureId,
        tile_at: impl Fn([i32; 2]) -> char,
    ) -> ClaimOutcome {
        if !self.contains(area.min) || !self.contains(area.max) {
            return ClaimOutcome::Boundary;
        }

        let mut collisions: Vec<Collision> = Vec::new();
        for position in area.positions() {
            if let Some(other) = self.owner(position)
                && other != owner
                && collisions.iter().all(|c| c.other != other)
            {
                collisions.push(Collision { other, position });
            }
        }

        if !collisions.is_empty() {
            return ClaimOutcome::Collided(collisions);
        }

        for position in area.positions() {
            if self.owner(position).is_none() {
                self.insert(
                    position,
                    Claim {
                        tile: tile_at(position),
                        owner,
                    },
                );
            }
        }
        ClaimOutcome::Claimed
    }

    /// Row-major iterator over claimed cells
    pub fn claims(&self) -> impl Iterator<Item = ([i32; 2], Claim)> + '_ {
        self.cells.indexed_iter().filter_map(|((r, c), cell)| {
            cell.map(|claim| ([r as i32, c as i32], claim))
        })
    }

    fn index(position: [i32; 2]) -> Option<(usize, usize)> {
        let [row, col] = position;
        (row >= 0 && col >= 0).then_some((row as usize, col as usize))
    }
}
