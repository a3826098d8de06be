//! Mined structures and the entities they are built from

/// Session-scoped id allocation
pub mod ids;
/// Structures, nodes and connectors
pub mod model;
/// Translated views used during matching
pub mod view;

pub use ids::StructureIdAllocator;
pub use model::{
    Connector, ConnectorId, ConnectorRef, Node, Structure, StructureId, Substitution,
};
pub use view::TranslatedView;
