//! Cell classification, cost fields and coordinates

use std::fmt;

/// Grid position as (column, row)
///
/// Ordering is row-major: lower row first, then lower column. The search
/// frontier relies on this ordering for its final tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index (x)
    pub col: usize,
    /// Row index (y)
    pub row: usize,
}

impl Coord {
    /// Create a coordinate from column and row
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Offset by a signed delta, returning `None` if either axis goes negative
    pub const fn offset(self, dcol: isize, drow: isize) -> Option<Self> {
        match (
            self.col.checked_add_signed(dcol),
            self.row.checked_add_signed(drow),
        ) {
            (Some(col), Some(row)) => Some(Self { col, row }),
            _ => None,
        }
    }

    /// Whether the two coordinates differ on both axes
    pub const fn is_diagonal_to(self, other: Self) -> bool {
        self.col != other.col && self.row != other.row
    }

    /// Whether `other` lies in the 3x3 block around `self`, excluding `self`
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let dx = self.col.abs_diff(other.col);
        let dy = self.row.abs_diff(other.row);
        dx <= 1 && dy <= 1 && dx + dy > 0
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// Boolean classifications a cell can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFlag {
    /// Search origin
    Start,
    /// Search destination
    Target,
    /// Impassable cell
    Wall,
}

/// Membership of a cell in the current search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Not yet discovered
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier
    Open,
    /// Already expanded
    Closed,
}

/// Cost triple carried by each cell during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Costs {
    /// Accumulated cost from the start along the best known path
    pub g: u32,
    /// Heuristic estimate of the remaining cost to the target
    pub h: u32,
    /// Total estimate, always `g + h`
    pub f: u32,
}

impl Costs {
    /// Build a cost triple, deriving `f` from `g` and `h`
    pub const fn new(g: u32, h: u32) -> Self {
        Self { g, h, f: g + h }
    }
}

/// A single grid position with its classification and search state
///
/// Classification flags are read-only outside the crate; edits go through
/// [`Grid`](crate::spatial::grid::Grid) so that start and target stay unique
/// and never share a cell with a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    start: bool,
    target: bool,
    wall: bool,
    /// Cost fields written by the search engine
    pub costs: Costs,
    /// Frontier/expanded membership in the current run
    pub visit: Visit,
    /// Predecessor on the best path found so far
    pub parent: Option<Coord>,
}

impl Cell {
    /// Create an unclassified cell at the given position
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            start: false,
            target: false,
            wall: false,
            costs: Costs { g: 0, h: 0, f: 0 },
            visit: Visit::Unvisited,
            parent: None,
        }
    }

    /// Position of this cell in the grid
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Whether this cell is the search origin
    pub const fn is_start(&self) -> bool {
        self.start
    }

    /// Whether this cell is the search destination
    pub const fn is_target(&self) -> bool {
        self.target
    }

    /// Whether this cell is impassable
    pub const fn is_wall(&self) -> bool {
        self.wall
    }

    /// Read a classification flag
    pub const fn has_flag(&self, flag: CellFlag) -> bool {
        match flag {
            CellFlag::Start => self.start,
            CellFlag::Target => self.target,
            CellFlag::Wall => self.wall,
        }
    }

    pub(crate) const fn set_flag(&mut self, flag: CellFlag, value: bool) {
        match flag {
            CellFlag::Start => self.start = value,
            CellFlag::Target => self.target = value,
            CellFlag::Wall => self.wall = value,
        }
    }

    /// Clear cost fields, parent link and visit membership
    pub const fn clear_search_state(&mut self) {
        self.costs = Costs { g: 0, h: 0, f: 0 };
        self.visit = Visit::Unvisited;
        self.parent = None;
    }
}
