//! Axis-aligned rectangles over grid positions

use crate::spatial::direction::Direction;

/// Axis-aligned bounding box in `[row, col]` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// A 1x1 box around a single cell
    pub const fn point(position: [i32; 2]) -> Self {
        Self {
            min: position,
            max: position,
        }
    }

    /// Box spanning two corners given in any order
    pub fn from_corners(a: [i32; 2], b: [i32; 2]) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// Smallest box containing every position, or `None` when empty
    pub fn enclosing(positions: impl IntoIterator<Item = [i32; 2]>) -> Option<Self> {
        positions.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self::point(p),
                Some(b) => Self::from_corners(
                    [b.min[0].min(p[0]), b.min[1].min(p[1])],
                    [b.max[0].max(p[0]), b.max[1].max(p[1])],
                ),
            })
        })
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }

    /// The box grown by one unit on the given side
    #[must_use]
    pub const fn extended(&self, direction: Direction) -> Self {
        let mut grown = *self;
        match direction {
            Direction::Left => grown.min[1] -= 1,
            Direction::Right => grown.max[1] += 1,
            Direction::Up => grown.min[0] -= 1,
            Direction::Down => grown.max[0] += 1,
        }
        grown
    }

    /// The row or column that [`BoundingBox::extended`] would add
    #[must_use]
    pub const fn frontier(&self, direction: Direction) -> Self {
        let grown = self.extended(direction);
        let mut strip = grown;
        match direction {
            Direction::Left => strip.max[1] = grown.min[1],
            Direction::Right => strip.min[1] = grown.max[1],
            Direction::Up => strip.max[0] = grown.min[0],
            Direction::Down => strip.min[0] = grown.max[0],
        }
        strip
    }

    /// Row-major iterator over every covered position
    pub fn positions(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let (min, max) = (self.min, self.max);
        (min[0]..=max[0]).flat_map(move |r| (min[1]..=max[1]).map(move |c| [r, c]))
    }
}
