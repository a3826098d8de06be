//! Tests for the jump zone: rectangle, fall zones and pair search

#[cfg(test)]
mod tests {
    use levelchunks::algorithm::{ReachabilityAnalyzer, ReachabilityConfig};
    use levelchunks::spatial::{BoundingBox, NodeKind};
    use levelchunks::structure::{Node, StructureId};

    fn node(position: [i32; 2], kind: NodeKind) -> Node {
        Node {
            position,
            tile: if kind == NodeKind::Solid { 'X' } else { '-' },
            kind,
            structure: StructureId(1),
        }
    }

    // Tests a target inside the rectangle is reachable
    #[test]
    fn test_rectangle_reach() {
        let analyzer = ReachabilityAnalyzer::default();

        assert!(analyzer.is_reachable([10, 5], [8, 6]));
        assert!(analyzer.is_reachable([10, 5], [14, 2]));
        assert!(!analyzer.is_reachable([10, 5], [2, 6]));
    }

    // Tests the rectangle is clamped at column zero and the map rows
    // Verified by removing the clamp on the top row
    #[test]
    fn test_rectangle_clamped() {
        let analyzer = ReachabilityAnalyzer::default();

        let zone = analyzer.jump_zone([2, 1]);
        assert_eq!(zone.rectangle, BoundingBox::from_corners([0, 0], [6, 4]));

        let zone = analyzer.jump_zone([14, 5]);
        assert_eq!(zone.rectangle, BoundingBox::from_corners([10, 2], [15, 8]));
    }

    // Tests the fall zones open towards the bottom of the map
    // Verified by building the left triangle from the right edge
    #[test]
    fn test_fall_zones() {
        let analyzer = ReachabilityAnalyzer::default();

        // Below the rectangle on either side
        assert!(analyzer.is_reachable([2, 5], [14, 1]));
        assert!(analyzer.is_reachable([2, 5], [14, 13]));
        // Beyond the right slope
        assert!(!analyzer.is_reachable([2, 5], [14, 16]));
        // Level with the source but past the horizontal reach
        assert!(!analyzer.is_reachable([2, 5], [3, 12]));
    }

    // Tests the pair search returns the closest reachable pair
    #[test]
    fn test_find_reachable_pair() {
        let analyzer = ReachabilityAnalyzer::default();
        let from = vec![
            node([15, 0], NodeKind::Solid),
            node([15, 1], NodeKind::Solid),
            node([14, 1], NodeKind::NonSolid),
        ];
        let to = vec![
            node([15, 6], NodeKind::Solid),
            node([15, 4], NodeKind::Solid),
        ];

        let pair = analyzer.find_reachable_pair(from, to);
        assert_eq!(
            pair.map(|(s, t)| (s.position, t.position)),
            Some(([15, 1], [15, 4]))
        );
    }

    // Tests non-solid sources never start a jump
    // Verified by using every node as a source
    #[test]
    fn test_non_solid_sources_ignored() {
        let analyzer = ReachabilityAnalyzer::default();
        let from = vec![node([15, 3], NodeKind::NonSolid)];
        let to = vec![node([15, 4], NodeKind::Solid)];

        assert!(!analyzer.structures_reachable(from, to));
    }

    // Tests exhausting every pair without a match
    #[test]
    fn test_unreachable_structures() {
        let analyzer = ReachabilityAnalyzer::default();
        let from = vec![node([3, 0], NodeKind::Solid)];
        let to = vec![node([3, 9], NodeKind::NonSolid), node([0, 12], NodeKind::Solid)];

        assert!(analyzer.find_reachable_pair(from, to).is_none());
    }

    // Tests custom reach constants widen the rectangle
    #[test]
    fn test_custom_config() {
        let analyzer = ReachabilityAnalyzer::new(ReachabilityConfig {
            horizontal_reach: 6,
            ..ReachabilityConfig::default()
        });

        assert_eq!(analyzer.config().horizontal_reach, 6);
        assert!(analyzer.is_reachable([3, 0], [3, 6]));
        assert!(!ReachabilityAnalyzer::default().is_reachable([3, 0], [3, 6]));
    }
}
