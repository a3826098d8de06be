use bitvec::prelude::*;

use crate::spatial::bounds::BoundingBox;

/// Occupancy bitmap over the bounding box of a set of cells
///
/// Used for overlap tests between a structure and a translated candidate.
/// Positions outside the box are never occupied, so membership tests cost a
/// bounds check and a single bit lookup.
#[derive(Clone, Debug)]
pub struct CellMask {
    bits: BitVec,
    area: Option<BoundingBox>,
}

impl CellMask {
    /// Build a mask marking every given position
    pub fn from_positions(positions: impl IntoIterator<Item = [i32; 2]> + Clone) -> Self {
        let area = BoundingBox::enclosing(positions.clone());
        let len = area.map_or(0, |a| a.height() * a.width());
        let mut mask = Self {
            bits: bitvec![0; len],
            area,
        };
        for position in positions {
            if let Some(offset) = mask.offset(position) {
                mask.bits.set(offset, true);
            }
        }
        mask
    }

    /// Test whether a position is occupied
    pub fn contains(&self, position: [i32; 2]) -> bool {
        self.offset(position)
            .is_some_and(|offset| self.bits.get(offset).as_deref() == Some(&true))
    }

    /// Test whether any of the positions is occupied
    pub fn intersects(&self, mut positions: impl Iterator<Item = [i32; 2]>) -> bool {
        positions.any(|p| self.contains(p))
    }

    /// Count occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    fn offset(&self, position: [i32; 2]) -> Option<usize> {
        let area = self.area?;
        area.contains(position).then(|| {
            let row = (position[0] - area.min[0]) as usize;
            let col = (position[1] - area.min[1]) as usize;
            row * area.width() + col
        })
    }
}
