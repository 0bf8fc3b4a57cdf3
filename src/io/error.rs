//! Error types for grid editing, search control and driver I/O

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::engine::SearchState;
use crate::spatial::cell::Coord;

/// Main error type for all grid and search operations
#[derive(Debug)]
pub enum SearchError {
    /// Start or target is missing, duplicated, walled, out of bounds or coincident
    InvalidConfiguration {
        /// Description of what is wrong with the configuration
        reason: String,
    },

    /// `step` was called while the engine was not running
    NotRunning {
        /// State the engine was in at the time of the call
        state: SearchState,
    },

    /// A path was requested before the search reached the target
    NotSucceeded {
        /// State the engine was in at the time of the call
        state: SearchState,
    },

    /// Coordinate lies outside the grid
    OutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Grid dimensions (cols, rows)
        dimensions: (usize, usize),
    },

    /// Edit conflicts with the current classification of a cell
    ///
    /// Occurs when:
    /// - placing the start or target on a wall
    /// - placing a wall on the start or target
    CellOccupied {
        /// Cell the edit was aimed at
        coord: Coord,
        /// Why the edit was refused
        reason: &'static str,
    },

    /// Parent links did not lead back to the start within the grid size
    BrokenParentChain {
        /// Last cell reached before the walk was abandoned
        at: Coord,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Text layout could not be parsed
    LayoutParse {
        /// One-based line number of the offending row (0 for whole-input problems)
        line: usize,
        /// Description of the problem
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

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid search configuration: {reason}")
            }
            Self::NotRunning { state } => {
                write!(f, "Cannot step: search is {state}, not running")
            }
            Self::NotSucceeded { state } => {
                write!(f, "No path available: search is {state}")
            }
            Self::OutOfBounds { coord, dimensions } => {
                write!(
                    f,
                    "Cell {coord} is outside the grid (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::CellOccupied { coord, reason } => {
                write!(f, "Cannot edit cell {coord}: {reason}")
            }
            Self::BrokenParentChain { at } => {
                write!(f, "Parent chain does not reach the start (stopped at {at})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LayoutParse { line, reason } => {
                write!(f, "Layout error on line {line}: {reason}")
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

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for search results
pub type Result<T> = std::result::Result<T, SearchError>;

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &impl ToString) -> SearchError {
    SearchError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}
