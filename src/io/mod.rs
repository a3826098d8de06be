/// Command-line front end and batch processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Level text files
pub mod level;
/// Terminal progress bars
pub mod progress;
/// Structure and combination dumps
pub mod report;
