//! Tile classification into solid platforms and enemies

use std::collections::HashSet;

use crate::io::configuration::{ENEMY_TILES, PLATFORM_TILES};

/// Physical kind of a node, derived from its tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A platform tile the player can stand on
    Solid,
    /// Anything else (air, decoration, enemies, coins)
    NonSolid,
}

/// Static tile sets deciding solidity and enemy counts
#[derive(Debug, Clone)]
pub struct TileClassifier {
    platforms: HashSet<char>,
    enemies: HashSet<char>,
}

impl Default for TileClassifier {
    fn default() -> Self {
        Self::new(PLATFORM_TILES.iter().copied(), ENEMY_TILES.iter().copied())
    }
}

impl TileClassifier {
    /// Create a classifier from explicit tile sets
    pub fn new(
        platforms: impl IntoIterator<Item = char>,
        enemies: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            platforms: platforms.into_iter().collect(),
            enemies: enemies.into_iter().collect(),
        }
    }

    /// Solid iff the tile belongs to the platform set
    pub fn kind(&self, tile: char) -> NodeKind {
        if self.platforms.contains(&tile) {
            NodeKind::Solid
        } else {
            NodeKind::NonSolid
        }
    }

    /// Whether the tile is one of the enemy symbols
    pub fn is_enemy(&self, tile: char) -> bool {
        self.enemies.contains(&tile)
    }
}
