//! Plain-text level files
//!
//! A level is stored as one line per map row, one character per tile. Files
//! may end with trailing blank lines and may use CRLF line endings.

use std::fs;
use std::path::Path;

use crate::io::configuration::MAP_ROWS;
use crate::io::error::{ChunkError, Result, WithPath};
use crate::spatial::TileMap;

/// Parse level text into a tile map
///
/// Short rows are padded with `filler`; fewer than [`MAP_ROWS`] rows leave
/// the remaining rows as filler. Trailing blank lines are not rows.
///
/// # Errors
///
/// Returns an error if the text has no rows or more than [`MAP_ROWS`] rows
pub fn parse_level(text: &str, filler: char) -> Result<TileMap> {
    let mut rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }

    if rows.iter().all(|r| r.is_empty()) {
        return Err(ChunkError::InvalidLevelData {
            reason: "level has no tiles".to_string(),
        });
    }
    if rows.len() > MAP_ROWS {
        return Err(ChunkError::InvalidLevelData {
            reason: format!("level has {} rows, at most {MAP_ROWS} allowed", rows.len()),
        });
    }

    Ok(TileMap::from_rows(&rows, filler))
}

/// Read and parse a level file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not a
/// valid level
pub fn load_level(path: &Path, filler: char) -> Result<TileMap> {
    let text = fs::read_to_string(path).with_path(path, "read level")?;
    parse_level(&text, filler)
}

/// Write a tile map as level text
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_level(map: &TileMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    fs::write(path, map.to_text()).with_path(path, "write level")
}
