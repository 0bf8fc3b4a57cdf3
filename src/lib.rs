//! Step-wise A* pathfinding on a fixed-size grid
//!
//! A grid of cells carries a start, a target and any number of walls. The
//! search engine expands one frontier cell per call so a driver can pace and
//! display the exploration, then reconstructs the cheapest 8-directional
//! path once the target is reached.

#![forbid(unsafe_code)]

/// Cost model, frontier ordering and the search state machine
pub mod algorithm;
/// Errors, configuration and the command-line driver
pub mod io;
/// Cells, grid storage and classification edits
pub mod spatial;

pub use algorithm::engine::{SearchEngine, SearchState, StepReport};
pub use io::error::{Result, SearchError};
pub use spatial::{Cell, CellFlag, Coord, Grid};
