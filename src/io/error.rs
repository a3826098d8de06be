//! Error types for extraction, matching and level file handling

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all structure mining operations
#[derive(Debug)]
pub enum ChunkError {
    /// Seed position lies outside the tile map
    InvalidSeed {
        /// Offending seed as `[row, col]`
        position: [i32; 2],
        /// Map dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Two seeds were registered on the same cell
    DuplicateSeed {
        /// Shared seed position as `[row, col]`
        position: [i32; 2],
    },

    /// Tile map read outside its current bounds
    OutOfBounds {
        /// Requested position as `[row, col]`
        position: [i32; 2],
        /// Map dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Level text doesn't describe a usable map
    InvalidLevelData {
        /// Description of what's wrong with the level
        reason: String,
    },

    /// Numerical computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Seed ({}, {}) is outside the {}x{} map",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::DuplicateSeed { position } => {
                write!(
                    f,
                    "Seed ({}, {}) was registered more than once",
                    position[0], position[1]
                )
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Tile ({}, {}) is out of bounds (map size {}x{})",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidLevelData { reason } => {
                write!(f, "Invalid level data: {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, ChunkError>;

impl From<std::io::Error> for ChunkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Attaches the file and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`ChunkError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ChunkError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChunkError {
    ChunkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ChunkError {
    ChunkError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
