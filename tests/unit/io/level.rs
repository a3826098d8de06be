//! Tests for level text parsing and file round trips

#[cfg(test)]
mod tests {
    use levelchunks::ChunkError;
    use levelchunks::io::level::{load_level, parse_level, save_level};

    // Tests rows map to the top of the map and short rows are padded
    // Verified by padding with a space instead of the filler
    #[test]
    fn test_parse_level() {
        let map = parse_level("--X\r\nXXXXX\n", '-').expect("valid level");

        assert_eq!(map.rows(), 16);
        assert_eq!(map.cols(), 5);
        assert_eq!(map.get([0, 2]).ok(), Some('X'));
        assert_eq!(map.get([0, 4]).ok(), Some('-'));
        assert_eq!(map.get([1, 4]).ok(), Some('X'));
        assert_eq!(map.get([15, 0]).ok(), Some('-'));
    }

    // Tests trailing blank lines after a full-height level are not rows
    // Verified by counting every line toward the row limit
    #[test]
    fn test_parse_level_trailing_blank_lines() {
        let full = "X\n".repeat(16);
        let map = parse_level(&format!("{full}\n"), '-').expect("valid level");
        assert_eq!(map.cols(), 1);
        assert_eq!(map.get([15, 0]).ok(), Some('X'));

        let crlf = "XX\r\n".repeat(16) + "\r\n\r\n";
        let map = parse_level(&crlf, '-').expect("valid level");
        assert_eq!(map.get([15, 1]).ok(), Some('X'));

        let inner_blank = format!("{full}\nX\n");
        assert!(matches!(
            parse_level(&inner_blank, '-'),
            Err(ChunkError::InvalidLevelData { .. })
        ));
    }

    // Tests empty text and oversized levels are rejected
    #[test]
    fn test_parse_level_errors() {
        assert!(matches!(
            parse_level("", '-'),
            Err(ChunkError::InvalidLevelData { .. })
        ));
        assert!(matches!(
            parse_level("\n\n", '-'),
            Err(ChunkError::InvalidLevelData { .. })
        ));

        let tall = "X\n".repeat(17);
        assert!(matches!(
            parse_level(&tall, '-'),
            Err(ChunkError::InvalidLevelData { .. })
        ));
    }

    // Tests a saved level loads back identically
    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("level.txt");
        let map = parse_level("-E-\nX#X\n", '-').expect("valid level");

        save_level(&map, &path).expect("save");
        let loaded = load_level(&path, '-').expect("load");
        assert_eq!(loaded, map);
    }

    // Tests a missing file reports the path
    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.txt");

        assert!(matches!(
            load_level(&path, '-'),
            Err(ChunkError::FileSystem { operation: "read level", .. })
        ));
    }
}
