//! Tests for triangle areas and the area-sum containment test

#[cfg(test)]
mod tests {
    use levelchunks::math::geometry::{Triangle, triangle_area};

    // Tests the area is unsigned regardless of winding
    #[test]
    fn test_triangle_area() {
        assert!((triangle_area([0.0, 0.0], [4.0, 0.0], [0.0, 3.0]) - 6.0).abs() < 1e-12);
        assert!((triangle_area([0.0, 3.0], [4.0, 0.0], [0.0, 0.0]) - 6.0).abs() < 1e-12);
        assert!(triangle_area([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]).abs() < 1e-12);
    }

    // Tests interior, edge, vertex and exterior points
    // Verified by comparing without tolerance
    #[test]
    fn test_contains() {
        let t = Triangle::new([0.0, 0.0], [4.0, 0.0], [0.0, 3.0]);

        assert!((t.area() - 6.0).abs() < 1e-12);
        assert!(t.contains([1.0, 1.0], 0.001));
        assert!(t.contains([2.0, 0.0], 0.001));
        assert!(t.contains([4.0, 0.0], 0.001));
        assert!(!t.contains([3.0, 3.0], 0.001));
        assert!(!t.contains([-0.5, 1.0], 0.001));
    }

    // Tests a collapsed triangle only contains its segment
    #[test]
    fn test_degenerate_triangle() {
        let t = Triangle::new([2.0, 0.0], [2.0, 15.0], [2.0, 15.0]);

        assert!(t.contains([2.0, 7.0], 0.001));
        assert!(!t.contains([3.0, 7.0], 0.001));
    }
}
