//! Offset-aware view of a structure for trial alignment
//!
//! Matching tries many placements of one structure against another. Instead
//! of copying the structure for each trial, the view applies the offset while
//! iterating and drops whatever would fall off the map.

use crate::structure::model::{Node, Structure};

/// A structure seen through a translation, clipped to the map
#[derive(Debug, Clone, Copy)]
pub struct TranslatedView<'a> {
    structure: &'a Structure,
    offset: [i32; 2],
    rows: i32,
}

impl<'a> TranslatedView<'a> {
    /// View `structure` moved by `offset` on a map with `rows` rows
    pub const fn new(structure: &'a Structure, offset: [i32; 2], rows: i32) -> Self {
        Self {
            structure,
            offset,
            rows,
        }
    }

    /// The offset that moves `from` onto `to`
    pub const fn aligning(from: [i32; 2], to: [i32; 2]) -> [i32; 2] {
        [to[0] - from[0], to[1] - from[1]]
    }

    /// Translated nodes that remain on the map
    pub fn nodes(&self) -> impl Iterator<Item = Node> + 'a {
        let (offset, rows) = (self.offset, self.rows);
        self.structure
            .nodes()
            .iter()
            .map(move |n| n.translated(offset))
            .filter(move |n| on_map(n.position, rows))
    }
}

const fn on_map(position: [i32; 2], rows: i32) -> bool {
    position[0] >= 0 && position[0] < rows && position[1] >= 0
}
