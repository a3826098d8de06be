//! Level chunk mining for 2D tile platformers
//!
//! Seeds placed on a level grow into disjoint rectangular structures. Where
//! growth is blocked by a neighbour, both structures get a connector. Connector
//! pairs from different structures are then tested by aligning the structures
//! and checking that they don't overlap and that a jump leads from one to the
//! other.

#![forbid(unsafe_code)]

/// Region growing, connector matching, reachability and selection
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Geometric primitives used by the jump model
pub mod math;
/// Tile maps, directions, bounding boxes and cell ownership
pub mod spatial;
/// Structures, connectors and id allocation
pub mod structure;

pub use io::error::{ChunkError, Result};
