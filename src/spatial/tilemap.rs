//! Fixed-height tile map that grows to the right on demand
//!
//! Levels are always [`MAP_ROWS`] tall. Writing past the last column pads the
//! map with the filler symbol, so the width is whatever the furthest write
//! required. Reads never extend the map.

use ndarray::Array2;

use crate::io::configuration::{DEFAULT_FILLER, MAP_ROWS};
use crate::io::error::{ChunkError, Result};
use crate::structure::Structure;

/// Tile symbols addressed by `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Array2<char>,
    filler: char,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(DEFAULT_FILLER)
    }
}

impl TileMap {
    /// Create a one-column map filled with `filler`
    pub fn new(filler: char) -> Self {
        Self {
            tiles: Array2::from_elem((MAP_ROWS, 1), filler),
            filler,
        }
    }

    /// Build a map from text rows, padding short rows with `filler`
    ///
    /// Rows beyond [`MAP_ROWS`] are ignored by [`TileMap::set`], so callers
    /// that care about extra rows must check before calling this.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], filler: char) -> Self {
        let mut map = Self::new(filler);
        for (r, line) in rows.iter().enumerate() {
            for (c, tile) in line.as_ref().chars().enumerate() {
                map.set([r as i32, c as i32], tile);
            }
        }
        map
    }

    /// Number of rows (always [`MAP_ROWS`])
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Current number of columns
    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    /// Symbol used for padding
    pub const fn filler(&self) -> char {
        self.filler
    }

    /// Check whether a position lies inside the current bounds
    pub fn contains(&self, position: [i32; 2]) -> bool {
        self.index(position).is_some()
    }

    /// Read the tile at `position`
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::OutOfBounds`] if the position is outside the
    /// current rows or columns
    pub fn get(&self, position: [i32; 2]) -> Result<char> {
        self.index(position)
            .and_then(|index| self.tiles.get(index).copied())
            .ok_or(ChunkError::OutOfBounds {
                position,
                dimensions: (self.rows(), self.cols()),
            })
    }

    /// Write a tile, extending columns as needed
    ///
    /// Writes to a negative position or a row past the fixed height are
    /// silently dropped.
    pub fn set(&mut self, position: [i32; 2], tile: char) {
        let [row, col] = position;
        if row < 0 || col < 0 || row as usize >= self.rows() {
            return;
        }

        let col = col as usize;
        if col >= self.cols() {
            self.extend_columns(col + 1);
        }

        if let Some(cell) = self.tiles.get_mut((row as usize, col)) {
            *cell = tile;
        }
    }

    /// Stamp every node of a structure onto the map
    pub fn apply(&mut self, structure: &Structure) {
        for node in structure.nodes() {
            self.set(node.position, node.tile);
        }
    }

    /// Row-major view of the map as text, one line per row
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in self.tiles.rows() {
            text.extend(row.iter());
            text.push('\n');
        }
        text
    }

    fn index(&self, position: [i32; 2]) -> Option<(usize, usize)> {
        let [row, col] = position;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }

    fn extend_columns(&mut self, new_cols: usize) {
        let (rows, old_cols) = self.tiles.dim();
        let mut extended = Array2::from_elem((rows, new_cols), self.filler);

        for i in 0..rows {
            for j in 0..old_cols {
                if let (Some(src), Some(dst)) =
                    (self.tiles.get([i, j]), extended.get_mut([i, j]))
                {
                    *dst = *src;
                }
            }
        }
        self.tiles = extended;
    }
}
