//! Plain-text grid layouts
//!
//! One line per row, one character per cell:
//! - `.` open cell
//! - `#` wall
//! - `S` start
//! - `T` target
//!
//! Blank lines and lines starting with `;` are ignored. Rendering writes the
//! same alphabet and can overlay a path (`*`) and search membership (`o` for
//! frontier, `x` for expanded).

use std::fmt::Write as _;
use std::path::Path;

use crate::io::configuration::GridDimensions;
use crate::io::error::{Result, SearchError};
use crate::spatial::cell::{Cell, CellFlag, Coord, Visit};
use crate::spatial::grid::Grid;

/// Character for an open cell
pub const OPEN_CHAR: char = '.';
/// Character for a wall
pub const WALL_CHAR: char = '#';
/// Character for the start cell
pub const START_CHAR: char = 'S';
/// Character for the target cell
pub const TARGET_CHAR: char = 'T';
/// Character for cells on the found path
pub const PATH_CHAR: char = '*';
/// Character for cells waiting in the frontier
pub const FRONTIER_CHAR: char = 'o';
/// Character for expanded cells
pub const EXPANDED_CHAR: char = 'x';

const COMMENT_PREFIX: char = ';';

/// What to draw on top of cell classifications
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    /// Cells of a found path
    pub path: &'a [Coord],
    /// Whether to mark frontier and expanded cells
    pub show_search: bool,
}

/// Parse a text layout into a grid
///
/// # Errors
///
/// Returns `LayoutParse` if:
/// - the layout has no rows
/// - rows differ in width
/// - a character is outside the layout alphabet
/// - more than one start or target is present
///
/// Returns `InvalidParameter` if the dimensions are out of range
pub fn parse_layout(text: &str) -> Result<Grid> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .collect();

    let Some(&(_, first)) = rows.first() else {
        return Err(SearchError::LayoutParse {
            line: 0,
            reason: "layout contains no rows".to_string(),
        });
    };
    let width = first.chars().count();
    let dimensions = GridDimensions::new(width, rows.len())?;
    let mut grid = Grid::new(dimensions);

    let mut start_line = None;
    let mut target_line = None;

    for (row, &(line_number, line)) in rows.iter().enumerate() {
        let row_width = line.chars().count();
        if row_width != width {
            return Err(SearchError::LayoutParse {
                line: line_number,
                reason: format!("row has {row_width} cells, expected {width}"),
            });
        }

        for (col, symbol) in line.chars().enumerate() {
            let coord = Coord::new(col, row);
            match symbol {
                OPEN_CHAR => {}
                WALL_CHAR => grid.set_wall(coord, true)?,
                START_CHAR => {
                    claim_unique(&mut start_line, line_number, "start")?;
                    grid.set_unique(coord, CellFlag::Start)?;
                }
                TARGET_CHAR => {
                    claim_unique(&mut target_line, line_number, "target")?;
                    grid.set_unique(coord, CellFlag::Target)?;
                }
                other => {
                    return Err(SearchError::LayoutParse {
                        line: line_number,
                        reason: format!("unexpected character '{other}' in column {col}"),
                    });
                }
            }
        }
    }

    Ok(grid)
}

fn claim_unique(seen: &mut Option<usize>, line: usize, role: &str) -> Result<()> {
    if let Some(first) = *seen {
        return Err(SearchError::LayoutParse {
            line,
            reason: format!("second {role} cell (first on line {first})"),
        });
    }
    *seen = Some(line);
    Ok(())
}

/// Read and parse a layout file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise the errors of
/// [`parse_layout`]
pub fn load_layout(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|e| SearchError::FileSystem {
        path: path.to_path_buf(),
        operation: "read layout",
        source: e,
    })?;
    parse_layout(&text)
}

/// Render a grid in the layout alphabet with an optional overlay
///
/// Start, target and walls always win over overlay marks. Each row ends with
/// a newline.
pub fn render_layout(grid: &Grid, overlay: Overlay<'_>) -> String {
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let coord = Coord::new(col, row);
            let symbol = grid
                .cell_at(coord)
                .map_or(OPEN_CHAR, |cell| cell_symbol(cell, &overlay));
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn cell_symbol(cell: &Cell, overlay: &Overlay<'_>) -> char {
    if cell.is_start() {
        START_CHAR
    } else if cell.is_target() {
        TARGET_CHAR
    } else if cell.is_wall() {
        WALL_CHAR
    } else if overlay.path.contains(&cell.coord()) {
        PATH_CHAR
    } else if overlay.show_search {
        match cell.visit {
            Visit::Open => FRONTIER_CHAR,
            Visit::Closed => EXPANDED_CHAR,
            Visit::Unvisited => OPEN_CHAR,
        }
    } else {
        OPEN_CHAR
    }
}

/// Tabulate the cost fields of every cell touched by the search
///
/// One line per open or expanded cell in row-major order:
/// `(col, row) g=.. h=.. f=.. parent=..`.
pub fn render_costs(grid: &Grid) -> String {
    let mut out = String::new();
    for cell in grid.cells().filter(|cell| cell.visit != Visit::Unvisited) {
        let parent = cell
            .parent
            .map_or_else(|| "-".to_string(), |parent| parent.to_string());
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{} g={} h={} f={} parent={parent}",
            cell.coord(),
            cell.costs.g,
            cell.costs.h,
            cell.costs.f
        );
    }
    out
}
