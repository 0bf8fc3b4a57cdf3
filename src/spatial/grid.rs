//! Fixed-size cell storage with bounds-checked lookup and classification edits
//!
//! The grid is created once and never resized. Cells live in a row-major
//! `Array2` indexed `[row, col]`; callers always address them by [`Coord`].
//! Start and target placement goes through [`Grid::set_unique`] and walls
//! through [`Grid::toggle_wall`], so the single-assignment invariant is
//! enforced in one place.

use log::debug;
use ndarray::Array2;

use crate::io::configuration::GridDimensions;
use crate::io::error::{Result, SearchError, invalid_parameter};
use crate::spatial::cell::{Cell, CellFlag, Coord};

/// Neighbor offsets as (dcol, drow): N, S, E, W, NE, NW, SE, SW
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

/// Rectangular collection of cells owning all classification and search state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of unclassified cells
    pub fn new(dimensions: GridDimensions) -> Self {
        let cells = Array2::from_shape_fn((dimensions.rows(), dimensions.cols()), |(row, col)| {
            Cell::new(Coord::new(col, row))
        });
        Self { cells }
    }

    /// Number of columns (width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows (height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells (never true for a validated grid)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Dimensions as (cols, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }

    /// Whether a coordinate lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.cols() && coord.row < self.rows()
    }

    /// Bounds-checked cell lookup
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get([coord.row, coord.col])
    }

    /// Bounds-checked mutable cell lookup for search bookkeeping
    ///
    /// Kept inside the crate so classification flags only change through the
    /// edit methods below.
    pub(crate) fn cell_at_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut([coord.row, coord.col])
    }

    /// Lookup that reports out-of-bounds coordinates as an error
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate lies outside the grid
    pub fn try_cell(&self, coord: Coord) -> Result<&Cell> {
        let dimensions = self.dimensions();
        self.cell_at(coord)
            .ok_or(SearchError::OutOfBounds { coord, dimensions })
    }

    fn try_cell_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let dimensions = self.dimensions();
        self.cell_at_mut(coord)
            .ok_or(SearchError::OutOfBounds { coord, dimensions })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// In-bounds neighbors of a cell in the fixed order of [`NEIGHBOR_OFFSETS`]
    ///
    /// Returns up to 8 positions; the cell itself is never included.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dcol, drow)| coord.offset(dcol, drow))
            .filter(|&neighbor| self.contains(neighbor))
            .collect()
    }

    /// Coordinates of every cell with the given flag set, in row-major order
    pub fn find_by_flag(&self, flag: CellFlag) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.has_flag(flag))
            .map(Cell::coord)
            .collect()
    }

    /// Check that a classification edit would be accepted, without applying it
    ///
    /// `Start` and `Target` refuse walled cells; `Wall` refuses the start and
    /// the target.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the coordinate lies outside the grid (`OutOfBounds`)
    /// - the edit conflicts with the cell's classification (`CellOccupied`)
    pub fn check_edit(&self, coord: Coord, flag: CellFlag) -> Result<()> {
        let cell = self.try_cell(coord)?;
        let reason = match flag {
            CellFlag::Start | CellFlag::Target if cell.is_wall() => {
                "start and target cannot be placed on a wall"
            }
            CellFlag::Wall if cell.is_start() || cell.is_target() => {
                "walls cannot cover the start or target"
            }
            _ => return Ok(()),
        };
        Err(SearchError::CellOccupied { coord, reason })
    }

    /// Place the start or target, clearing that flag from every other cell
    ///
    /// Moving the start onto the current target (or vice versa) removes the
    /// other role from that cell. Walls are edited with [`Grid::toggle_wall`]
    /// and [`Grid::set_wall`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `flag` is [`CellFlag::Wall`] (`InvalidParameter`)
    /// - the coordinate lies outside the grid
    /// - the cell is a wall
    pub fn set_unique(&mut self, coord: Coord, flag: CellFlag) -> Result<()> {
        let opposite = match flag {
            CellFlag::Start => CellFlag::Target,
            CellFlag::Target => CellFlag::Start,
            CellFlag::Wall => {
                return Err(invalid_parameter(
                    "flag",
                    &"Wall",
                    &"walls are not unique, use toggle_wall or set_wall",
                ));
            }
        };
        self.check_edit(coord, flag)?;

        for other in &mut self.cells {
            other.set_flag(flag, false);
        }

        let cell = self.try_cell_mut(coord)?;
        cell.set_flag(flag, true);
        cell.set_flag(opposite, false);

        debug!("Placed {flag:?} at {coord}");
        Ok(())
    }

    /// Flip the wall flag of a cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the coordinate lies outside the grid
    /// - the cell is the start or the target
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<()> {
        self.check_edit(coord, CellFlag::Wall)?;
        let cell = self.try_cell_mut(coord)?;
        let wall = !cell.is_wall();
        cell.set_flag(CellFlag::Wall, wall);
        debug!("Wall at {coord} set to {wall}");
        Ok(())
    }

    /// Mark a cell as a wall without toggling
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::toggle_wall`]
    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<()> {
        if self.try_cell(coord)?.is_wall() == wall {
            return Ok(());
        }
        self.toggle_wall(coord)
    }

    /// Reset costs, parents and visit membership on every cell
    pub fn clear_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.clear_search_state();
        }
    }
}
