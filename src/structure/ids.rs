use crate::io::configuration::FIRST_STRUCTURE_ID;
use crate::structure::model::StructureId;

/// Hands out structure ids for one extraction session
///
/// Share a single allocator across every level mined in a session so ids stay
/// unique when the structures are later matched together.
#[derive(Debug, Clone)]
pub struct StructureIdAllocator {
    next: u32,
}

impl Default for StructureIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureIdAllocator {
    /// Allocator starting at [`FIRST_STRUCTURE_ID`]
    pub const fn new() -> Self {
        Self::starting_at(FIRST_STRUCTURE_ID)
    }

    /// Allocator whose first id is `first`
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Take the next id
    pub const fn allocate(&mut self) -> StructureId {
        let id = StructureId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`StructureIdAllocator::allocate`] returns
    pub const fn peek(&self) -> StructureId {
        StructureId(self.next)
    }
}
