//! Spatial data structures for the search board
//!
//! This module contains spatial-related functionality including:
//! - Cell classification and per-cell search state
//! - Grid storage, neighbor lookup and classification edits
//! - Seeded wall scattering

/// Cell classification, coordinates and cost fields
pub mod cell;
/// Grid storage and classification edits
pub mod grid;
/// Random wall placement
pub mod scatter;

pub use cell::{Cell, CellFlag, Coord, Costs, Visit};
pub use grid::Grid;
