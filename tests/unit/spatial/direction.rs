//! Tests for direction offsets, opposites and display

#[cfg(test)]
mod tests {
    use levelchunks::spatial::Direction;

    // Tests the cycle order used by growth
    #[test]
    fn test_cycle_order() {
        assert_eq!(
            Direction::CYCLE,
            [
                Direction::Left,
                Direction::Down,
                Direction::Right,
                Direction::Up
            ]
        );
    }

    // Tests opposite is an involution and flips the delta
    // Verified by mapping Left to Up
    #[test]
    fn test_opposite() {
        for d in Direction::CYCLE {
            assert_eq!(d.opposite().opposite(), d);
            let [r, c] = d.delta();
            assert_eq!(d.opposite().delta(), [-r, -c]);
        }
    }

    // Tests row/col deltas: Up lowers the row, Right raises the column
    #[test]
    fn test_step() {
        assert_eq!(Direction::Up.step([5, 5]), [4, 5]);
        assert_eq!(Direction::Down.step([5, 5]), [6, 5]);
        assert_eq!(Direction::Left.step([5, 5]), [5, 4]);
        assert_eq!(Direction::Right.step([5, 5]), [5, 6]);
    }

    // Tests canonical and vertical classification
    #[test]
    fn test_classification() {
        assert!(Direction::Right.is_canonical());
        assert!(Direction::Up.is_canonical());
        assert!(!Direction::Left.is_canonical());
        assert!(!Direction::Down.is_canonical());

        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    // Tests glyphs and names
    #[test]
    fn test_glyph_and_display() {
        assert_eq!(Direction::Left.glyph(), '<');
        assert_eq!(Direction::Up.glyph(), '^');
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
