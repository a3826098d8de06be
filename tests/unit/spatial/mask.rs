//! Tests for occupancy masks used in overlap checks

#[cfg(test)]
mod tests {
    use levelchunks::spatial::mask::CellMask;

    // Tests membership inside and outside the covered area
    // Verified by setting every bit of the area
    #[test]
    fn test_contains() {
        let mask = CellMask::from_positions(vec![[2, 2], [4, 5]]);

        assert!(mask.contains([2, 2]));
        assert!(mask.contains([4, 5]));
        assert!(!mask.contains([3, 3]));
        assert!(!mask.contains([0, 0]));
        assert!(!mask.contains([-1, 2]));
        assert_eq!(mask.count(), 2);
    }

    // Tests intersection against a translated set
    #[test]
    fn test_intersects() {
        let mask = CellMask::from_positions(vec![[10, 0], [10, 1]]);

        assert!(mask.intersects([[9, 0], [10, 1]].into_iter()));
        assert!(!mask.intersects([[10, 2], [10, 3]].into_iter()));
        assert!(!mask.intersects(std::iter::empty()));
    }

    // Tests an empty mask never reports occupancy
    #[test]
    fn test_empty_mask() {
        let mask = CellMask::from_positions(Vec::<[i32; 2]>::new());

        assert!(mask.is_empty());
        assert_eq!(mask.count(), 0);
        assert!(!mask.contains([0, 0]));
    }
}
