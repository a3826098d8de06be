//! Tests for session-scoped structure id allocation

#[cfg(test)]
mod tests {
    use levelchunks::structure::{StructureId, StructureIdAllocator};

    // Tests ids start at one and increase by one
    // Verified by starting the allocator at zero
    #[test]
    fn test_sequential_ids() {
        let mut ids = StructureIdAllocator::new();

        assert_eq!(ids.peek(), StructureId(1));
        assert_eq!(ids.allocate(), StructureId(1));
        assert_eq!(ids.allocate(), StructureId(2));
        assert_eq!(ids.peek(), StructureId(3));
    }

    // Tests custom starting points and the default
    #[test]
    fn test_starting_at() {
        let mut ids = StructureIdAllocator::starting_at(40);
        assert_eq!(ids.allocate(), StructureId(40));

        let mut fresh = StructureIdAllocator::default();
        assert_eq!(fresh.allocate(), StructureId(1));
    }
}
