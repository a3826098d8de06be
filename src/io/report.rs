//! Human-readable dump of mined structures and their combinations

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::{COMBINATIONS_FILE_NAME, MAP_ROWS};
use crate::io::error::{Result, WithPath};
use crate::structure::Structure;

/// Glyph grid of a structure, with a header line
pub fn render_structure(structure: &Structure) -> String {
    let mut text = format!("{structure}\n");
    text.push_str(&structure.to_text(MAP_ROWS));
    text
}

/// One line per connector listing its combinable partners
pub fn render_combinations(structures: &[Structure]) -> String {
    let mut text = String::new();
    for structure in structures {
        for connector in structure.connectors() {
            let partners: Vec<String> = connector
                .combinable
                .iter()
                .map(|entry| format!("{}:{}", entry.structure, entry.connector))
                .collect();
            // Writing to a String cannot fail
            let _ = writeln!(
                text,
                "{}:{} ({}, {}) {} -> [{}]",
                structure.id(),
                connector.id,
                connector.position[0],
                connector.position[1],
                connector.direction,
                partners.join(", ")
            );
        }
    }
    text
}

/// File name used for a structure's glyph dump
pub fn structure_file_name(structure: &Structure) -> String {
    format!("s_{}.txt", structure.id())
}

/// Write one glyph file per structure plus the combinations listing
///
/// Returns the paths written, structure files first.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written
pub fn write_report(structures: &[Structure], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_path(dir, "create directory")?;

    let mut written = Vec::with_capacity(structures.len() + 1);
    for structure in structures {
        let path = dir.join(structure_file_name(structure));
        fs::write(&path, render_structure(structure)).with_path(&path, "write structure")?;
        written.push(path);
    }

    let path = dir.join(COMBINATIONS_FILE_NAME);
    fs::write(&path, render_combinations(structures)).with_path(&path, "write combinations")?;
    written.push(path);

    Ok(written)
}
