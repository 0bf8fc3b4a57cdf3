//! Command-line interface for running a search on a layout file or generated grid

use crate::algorithm::cost::path_cost;
use crate::algorithm::engine::{SearchEngine, SearchState};
use crate::io::configuration::{
    ANIMATION_STEP_DELAY_MS, DEFAULT_SEED, DEFAULT_STEP_DELAY_MS, DEFAULT_WALL_DENSITY,
    GridDimensions,
};
use crate::io::error::{Result, SearchError};
use crate::io::layout::{Overlay, load_layout, render_costs, render_layout};
use crate::io::progress::SearchProgress;
use crate::spatial::cell::{CellFlag, Coord};
use crate::spatial::grid::Grid;
use crate::spatial::scatter::scatter_walls;
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pathgrid")]
#[command(author, version, about = "Find shortest 8-directional paths on a grid with A*")]
/// Command-line arguments for the search driver
// CLI tools commonly need multiple boolean flags for display options
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Layout file (`.` open, `#` wall, `S` start, `T` target)
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Grid width in cells when no layout is given
    #[arg(short = 'w', long, conflicts_with = "layout")]
    pub width: Option<usize>,

    /// Grid height in cells when no layout is given
    #[arg(short = 'H', long, conflicts_with = "layout")]
    pub height: Option<usize>,

    /// Start cell as `col,row`
    #[arg(short, long, value_parser = parse_coord)]
    pub start: Option<Coord>,

    /// Target cell as `col,row`
    #[arg(short, long, value_parser = parse_coord)]
    pub target: Option<Coord>,

    /// Share of free cells to turn into walls (0 to 1)
    #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub walls: f64,

    /// Random seed for reproducible wall scattering
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Delay between steps in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,

    /// Step at the pace of the animated board
    #[arg(short, long, conflicts_with = "delay_ms")]
    pub animate: bool,

    /// Mark frontier and expanded cells in the output
    #[arg(short = 'e', long)]
    pub explored: bool,

    /// Print g/h/f costs of every cell touched by the search
    #[arg(short, long)]
    pub costs: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Pause inserted after every expansion
    pub const fn step_delay(&self) -> Duration {
        if self.animate {
            Duration::from_millis(ANIMATION_STEP_DELAY_MS)
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse a `col,row` pair
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated unsigned integers
pub fn parse_coord(text: &str) -> std::result::Result<Coord, String> {
    let (col, row) = text
        .split_once(',')
        .ok_or_else(|| format!("expected col,row but got '{text}'"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    Ok(Coord::new(col, row))
}

/// Outcome of one driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// Terminal state of the search
    pub state: SearchState,
    /// Number of expansions performed
    pub expansions: usize,
    /// Cells from start to target (empty when no path exists)
    pub path: Vec<Coord>,
    /// Cost of the path, if one was found
    pub cost: Option<u32>,
}

/// Builds the board from CLI arguments, runs the search and reports the result
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the search and print the result to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built, the search
    /// configuration is invalid, or stdout cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_writer(&mut out)?;
        Ok(())
    }

    /// Run the search and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the layout file cannot be read or parsed
    /// - the dimensions, coordinates or wall density are invalid
    /// - start or target is missing, walled or coincident
    /// - writing the report fails
    pub fn run_with_writer<W: Write>(&self, out: &mut W) -> Result<SearchSummary> {
        let mut engine = SearchEngine::new(self.build_grid()?);
        self.place_endpoints(&mut engine)?;

        let mut grid = engine.into_grid();
        if self.cli.walls > 0.0 {
            let walled = scatter_walls(&mut grid, self.cli.walls, self.cli.seed)?;
            info!("Scattered {} walls with seed {}", walled.len(), self.cli.seed);
        }
        let mut engine = SearchEngine::new(grid);

        engine.start_from_flags()?;

        let passable = engine.grid().cells().filter(|cell| !cell.is_wall()).count();
        let mut progress = if self.cli.should_show_progress() {
            SearchProgress::new(passable)
        } else {
            SearchProgress::hidden(passable)
        };
        let delay = self.cli.step_delay();

        let state = engine.run_observed(|report, engine| {
            progress.record(report, engine.open_len());
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        })?;
        progress.finish(state);

        let summary = match state {
            SearchState::Succeeded => {
                let path = engine.reconstruct_path()?;
                let cost = path_cost(&path);
                SearchSummary {
                    state,
                    expansions: engine.expansions(),
                    path,
                    cost: Some(cost),
                }
            }
            _ => SearchSummary {
                state,
                expansions: engine.expansions(),
                path: Vec::new(),
                cost: None,
            },
        };

        self.write_report(out, &engine, &summary)
            .map_err(|e| SearchError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write report",
                source: e,
            })?;

        Ok(summary)
    }

    fn build_grid(&self) -> Result<Grid> {
        if let Some(path) = &self.cli.layout {
            return load_layout(path);
        }

        let dimensions = match (self.cli.width, self.cli.height) {
            (Some(w), Some(h)) => GridDimensions::new(w, h)?,
            (Some(w), None) => GridDimensions::new(w, w)?,
            (None, Some(h)) => GridDimensions::new(h, h)?,
            (None, None) => GridDimensions::default(),
        };
        Ok(Grid::new(dimensions))
    }

    // Explicit coordinates override the layout; generated grids fall back to opposite corners
    fn place_endpoints(&self, engine: &mut SearchEngine) -> Result<()> {
        let grid = engine.grid();
        let corner = Coord::new(grid.cols() - 1, grid.rows() - 1);
        let has_start = !grid.find_by_flag(CellFlag::Start).is_empty();
        let has_target = !grid.find_by_flag(CellFlag::Target).is_empty();

        let start = self
            .cli
            .start
            .or_else(|| (!has_start).then_some(Coord::new(0, 0)));
        let target = self.cli.target.or_else(|| (!has_target).then_some(corner));

        if let Some(start) = start {
            engine.apply_edit(start, CellFlag::Start)?;
        }
        if let Some(target) = target {
            engine.apply_edit(target, CellFlag::Target)?;
        }
        Ok(())
    }

    fn write_report<W: Write>(
        &self,
        out: &mut W,
        engine: &SearchEngine,
        summary: &SearchSummary,
    ) -> std::io::Result<()> {
        let overlay = Overlay {
            path: &summary.path,
            show_search: self.cli.explored,
        };
        write!(out, "{}", render_layout(engine.grid(), overlay))?;
        writeln!(out)?;
        writeln!(out, "state: {}", summary.state)?;
        writeln!(out, "expansions: {}", summary.expansions)?;
        match summary.cost {
            Some(cost) => {
                writeln!(out, "path length: {} cells", summary.path.len())?;
                writeln!(out, "path cost: {cost}")?;
            }
            None => writeln!(out, "no path between start and target")?,
        }

        if self.cli.costs {
            writeln!(out)?;
            write!(out, "{}", render_costs(engine.grid()))?;
        }
        Ok(())
    }
}
