//! Grid sizing, pacing and display constants with validated dimensions

use crate::io::error::{Result, invalid_parameter};

// Viewport the original board was laid out on
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: usize = 660;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: usize = 480;
/// Edge length of one cell in pixels
pub const DEFAULT_CELL_SIZE: usize = 60;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible wall scattering
pub const DEFAULT_SEED: u64 = 42;
/// Share of cells turned into walls when scattering (0 disables)
pub const DEFAULT_WALL_DENSITY: f64 = 0.0;
/// Delay between steps when pacing a search, in milliseconds
pub const DEFAULT_STEP_DELAY_MS: u64 = 0;
/// Step interval of the animated board, in milliseconds
pub const ANIMATION_STEP_DELAY_MS: u64 = 250;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Validated grid size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    cols: usize,
    rows: usize,
}

impl GridDimensions {
    /// Validate a width and height in cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        check_dimension("width", cols)?;
        check_dimension("height", rows)?;
        Ok(Self { cols, rows })
    }

    /// Derive the grid size from a viewport in pixels and a cell edge length
    ///
    /// Partial cells at the right and bottom edges count as whole cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the cell size is zero or the resulting
    /// dimensions are invalid
    pub fn from_viewport(width_px: usize, height_px: usize, cell_size: usize) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be positive",
            ));
        }
        Self::new(width_px.div_ceil(cell_size), height_px.div_ceil(cell_size))
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for GridDimensions {
    // 660x480 at 60px per cell: 11 columns, 8 rows
    fn default() -> Self {
        Self {
            cols: DEFAULT_VIEWPORT_WIDTH.div_ceil(DEFAULT_CELL_SIZE),
            rows: DEFAULT_VIEWPORT_HEIGHT.div_ceil(DEFAULT_CELL_SIZE),
        }
    }
}

fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
