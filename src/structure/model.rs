//! Structures, their nodes, and their connectors
//!
//! A [`Structure`] is a chunk of level mined by the region grower. Its nodes
//! are the cells it claimed; its connectors are the cells where growth was
//! stopped by a neighbouring structure. Connectors carry the list of
//! connectors on other structures they could be joined to.

use std::fmt;

use crate::io::configuration::BLANK_GLYPH;
use crate::spatial::{BoundingBox, Direction, NodeKind, TileClassifier};

/// Identity of a structure, unique within one allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-structure sequential connector id
pub type ConnectorId = usize;

/// A connector on some structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorRef {
    /// Structure owning the connector
    pub structure: StructureId,
    /// Connector id within that structure
    pub connector: ConnectorId,
}

/// One claimed cell of a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Cell as `[row, col]`
    pub position: [i32; 2],
    /// Tile symbol
    pub tile: char,
    /// Solid if the tile is a platform
    pub kind: NodeKind,
    /// Structure the node belongs to
    pub structure: StructureId,
}

impl Node {
    /// Whether a player can stand on this node
    pub fn is_solid(&self) -> bool {
        self.kind == NodeKind::Solid
    }

    /// Euclidean distance between two nodes
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(other.position[0] - self.position[0]);
        let dc = f64::from(other.position[1] - self.position[1]);
        dr.hypot(dc)
    }

    /// Copy of the node moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: [i32; 2]) -> Self {
        Self {
            position: [self.position[0] + offset[0], self.position[1] + offset[1]],
            ..*self
        }
    }
}

/// Exposed edge cell of a structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    /// Sequential id within the owning structure
    pub id: ConnectorId,
    /// Cell as `[row, col]`
    pub position: [i32; 2],
    /// Side of the structure this connector exposes
    pub direction: Direction,
    /// Structure the connector belongs to
    pub structure: StructureId,
    /// Connectors on other structures this one can be joined with
    pub combinable: Vec<ConnectorRef>,
    /// Connector chosen by the assembly stage; never set during mining
    pub combined: Option<ConnectorRef>,
}

impl Connector {
    /// Reference to this connector
    pub const fn reference(&self) -> ConnectorRef {
        ConnectorRef {
            structure: self.structure,
            connector: self.id,
        }
    }
}

/// A still-open way to extend a structure: an uncombined connector and one
/// of its candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Open connector on this structure
    pub connector: ConnectorRef,
    /// Candidate connector on another structure
    pub candidate: ConnectorRef,
}

/// A mined chunk of level
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    id: StructureId,
    nodes: Vec<Node>,
    connectors: Vec<Connector>,
    enemies: usize,
}

impl Structure {
    /// Create an empty structure
    pub const fn new(id: StructureId) -> Self {
        Self {
            id,
            nodes: Vec::new(),
            connectors: Vec::new(),
            enemies: 0,
        }
    }

    /// Structure identity
    pub const fn id(&self) -> StructureId {
        self.id
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Connectors in id order
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Mutable access to connectors, for recording combinations
    pub fn connectors_mut(&mut self) -> &mut [Connector] {
        &mut self.connectors
    }

    /// Number of connectors
    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Number of nodes holding an enemy tile
    pub const fn enemy_count(&self) -> usize {
        self.enemies
    }

    /// Append a node built from a claimed cell
    pub fn push_node(&mut self, position: [i32; 2], tile: char, classifier: &TileClassifier) {
        if classifier.is_enemy(tile) {
            self.enemies += 1;
        }
        self.nodes.push(Node {
            position,
            tile,
            kind: classifier.kind(tile),
            structure: self.id,
        });
    }

    /// Append a connector, assigning the next sequential id
    pub fn push_connector(&mut self, position: [i32; 2], direction: Direction) -> ConnectorId {
        let id = self.connectors.len();
        self.connectors.push(Connector {
            id,
            position,
            direction,
            structure: self.id,
            combinable: Vec::new(),
            combined: None,
        });
        id
    }

    /// Look up a connector by id
    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(id)
    }

    /// Look up a connector by id for modification
    pub fn connector_mut(&mut self, id: ConnectorId) -> Option<&mut Connector> {
        self.connectors.get_mut(id)
    }

    /// Nodes a player can stand on
    pub fn solids(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_solid())
    }

    /// Box around all nodes and connectors, `None` for an empty structure
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(self.positions())
    }

    /// Shift everything so the leftmost node or connector sits in column 0
    pub fn relativize(&mut self) {
        let Some(min_col) = self.positions().map(|p| p[1]).min() else {
            return;
        };
        for node in &mut self.nodes {
            node.position[1] -= min_col;
        }
        for connector in &mut self.connectors {
            connector.position[1] -= min_col;
        }
    }

    /// Every candidate of every connector not yet combined
    pub fn available_substitutions(&self) -> Vec<Substitution> {
        self.connectors
            .iter()
            .filter(|c| c.combined.is_none())
            .flat_map(|c| {
                c.combinable.iter().map(move |&candidate| Substitution {
                    connector: c.reference(),
                    candidate,
                })
            })
            .collect()
    }

    /// Character grid of node tiles with connector arrows drawn over them
    ///
    /// The grid has `rows` rows and enough columns to reach the rightmost
    /// cell. Cells at negative coordinates or beyond `rows` are skipped.
    pub fn glyph_grid(&self, rows: usize) -> Vec<Vec<char>> {
        let width = self
            .positions()
            .map(|p| p[1] + 1)
            .max()
            .map_or(0, |w| w.max(0) as usize);
        let mut grid = vec![vec![BLANK_GLYPH; width]; rows];

        let mut draw = |position: [i32; 2], glyph: char| {
            let [r, c] = position;
            if r < 0 || c < 0 {
                return;
            }
            if let Some(cell) = grid
                .get_mut(r as usize)
                .and_then(|row| row.get_mut(c as usize))
            {
                *cell = glyph;
            }
        };

        for node in &self.nodes {
            draw(node.position, node.tile);
        }
        for connector in &self.connectors {
            draw(connector.position, connector.direction.glyph());
        }
        grid
    }

    /// [`Structure::glyph_grid`] joined into lines
    pub fn to_text(&self, rows: usize) -> String {
        self.glyph_grid(rows)
            .into_iter()
            .map(|row| row.into_iter().collect::<String>() + "\n")
            .collect()
    }

    fn positions(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        self.nodes
            .iter()
            .map(|n| n.position)
            .chain(self.connectors.iter().map(|c| c.position))
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structure {} ({} nodes, {} connectors, {} enemies)",
            self.id,
            self.nodes.len(),
            self.connectors.len(),
            self.enemies
        )
    }
}
