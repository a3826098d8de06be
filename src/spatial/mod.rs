//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - The growable tile map and tile classification
//! - Directions and bounding boxes
//! - The ownership grid used during extraction
//! - Occupancy masks for overlap tests

/// Rectangles over grid positions
pub mod bounds;
/// Growth directions and their offsets
pub mod direction;
/// Bitmap occupancy masks
pub mod mask;
/// Per-cell ownership during extraction
pub mod ownership;
/// Fixed-height, growable tile map
pub mod tilemap;
/// Solid and enemy tile classification
pub mod tiles;

pub use bounds::BoundingBox;
pub use direction::Direction;
pub use tilemap::TileMap;
pub use tiles::{NodeKind, TileClassifier};
