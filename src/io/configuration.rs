//! Extraction constants and runtime configuration defaults

/// Number of rows in every level
pub const MAP_ROWS: usize = 16;

/// Symbol used to pad newly created map columns
pub const DEFAULT_FILLER: char = '-';

/// Symbol drawn behind structure glyphs where no node exists
pub const BLANK_GLYPH: char = ' ';

// Tile sets of the source game
/// Tiles a player can stand on
pub const PLATFORM_TILES: &[char] = &[
    'X', '#', 't', 'Q', 'S', '?', 'U', '%', 'b', '*', 'B', '1', '2',
];
/// Tiles counted as enemies
pub const ENEMY_TILES: &[char] = &['y', 'Y', 'E', 'g', 'k', 'K', 'r'];

// Jump physics approximation
/// Columns reachable either side of a standing position
pub const HORIZONTAL_REACH: i32 = 3;
/// Rows reachable above or below a standing position
pub const VERTICAL_REACH: i32 = 4;
/// Slack admitted by the point-in-triangle area test
pub const TRIANGLE_TOLERANCE: f64 = 0.001;

// Default values for configurable parameters
/// Default expansion parameter D (growth budget is `4 * D`)
pub const DEFAULT_EXPANSION: usize = 4;
/// Default number of seeds sampled per level
pub const DEFAULT_SEED_COUNT: usize = 35;
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;
/// First id handed out by a fresh allocator
pub const FIRST_STRUCTURE_ID: u32 = 1;

// Output settings
/// Default directory for reports and logs
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Log file written inside the output directory
pub const LOG_FILE_NAME: &str = "levelchunks.log";
/// Combinability listing written inside the output directory
pub const COMBINATIONS_FILE_NAME: &str = "combinations.txt";
/// Extension of level files picked up from a directory
pub const LEVEL_EXTENSION: &str = "txt";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
