//! Tests for structure dumps and the combinations listing

#[cfg(test)]
mod tests {
    use levelchunks::io::report::{
        render_combinations, render_structure, structure_file_name, write_report,
    };
    use levelchunks::spatial::{Direction, TileClassifier};
    use levelchunks::structure::{ConnectorRef, Structure, StructureId};
    use std::fs;

    fn pair() -> Vec<Structure> {
        let classifier = TileClassifier::default();
        let mut a = Structure::new(StructureId(1));
        a.push_node([15, 0], 'X', &classifier);
        a.push_connector([15, 1], Direction::Right);
        let mut b = Structure::new(StructureId(2));
        b.push_node([15, 1], 'X', &classifier);
        b.push_connector([15, 0], Direction::Left);

        if let Some(c) = a.connector_mut(0) {
            c.combinable.push(ConnectorRef {
                structure: StructureId(2),
                connector: 0,
            });
        }
        vec![a, b]
    }

    // Tests the rendered structure has a header and sixteen grid lines
    #[test]
    fn test_render_structure() {
        let structures = pair();
        let Some(first) = structures.first() else {
            return;
        };
        let text = render_structure(first);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines.first().copied(), Some("Structure 1 (1 nodes, 1 connectors, 0 enemies)"));
        assert_eq!(lines.last().copied(), Some("X>"));
        assert_eq!(structure_file_name(first), "s_1.txt");
    }

    // Tests one line per connector listing its partners
    // Verified by listing only connectors with partners
    #[test]
    fn test_render_combinations() {
        let text = render_combinations(&pair());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["1:0 (15, 1) right -> [2:0]", "2:0 (15, 0) left -> []"]);
    }

    // Tests the report writes a file per structure plus the listing
    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("report");

        let written = write_report(&pair(), &out).expect("report written");

        assert_eq!(written.len(), 3);
        assert!(out.join("s_1.txt").is_file());
        assert!(out.join("s_2.txt").is_file());
        let listing = fs::read_to_string(out.join("combinations.txt")).expect("listing");
        assert!(listing.contains("-> [2:0]"));
    }
}
