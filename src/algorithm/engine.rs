//! Step-wise A* search state machine over an owned grid

use std::fmt;

use log::{debug, info, trace};

use crate::algorithm::cost::{heuristic, step_cost};
use crate::algorithm::frontier::Frontier;
use crate::io::error::{Result, SearchError, invalid_configuration};
use crate::spatial::cell::{CellFlag, Coord, Costs, Visit};
use crate::spatial::grid::Grid;

/// Lifecycle of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No run in progress; all transient cell state is cleared
    #[default]
    Idle,
    /// Frontier is non-empty and the target has not been expanded
    Running,
    /// Target was expanded; a path can be reconstructed
    Succeeded,
    /// Frontier ran dry without reaching the target
    Failed,
}

impl SearchState {
    /// Whether the run has reached `Succeeded` or `Failed`
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a single expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Cell moved from the frontier to the closed set
    pub expanded: Coord,
    /// Neighbors that were added to the frontier or given a cheaper path
    pub relaxed: usize,
    /// Engine state after the step
    pub state: SearchState,
}

/// Step-wise A* search over an owned grid
///
/// The engine owns the grid for its whole life so that edits and search
/// bookkeeping cannot drift apart: every classification edit goes through
/// [`SearchEngine::apply_edit`], which resets a run in progress before
/// touching the grid. Readers borrow the grid between steps through
/// [`SearchEngine::grid`].
#[derive(Debug, Clone)]
pub struct SearchEngine {
    grid: Grid,
    state: SearchState,
    frontier: Frontier,
    /// (start, target) of the current run
    endpoints: Option<(Coord, Coord)>,
    closed_count: usize,
    expansions: usize,
}

impl SearchEngine {
    /// Create an idle engine over a grid
    ///
    /// Any cost or membership data already on the grid is cleared.
    pub fn new(mut grid: Grid) -> Self {
        grid.clear_search_state();
        Self {
            grid,
            state: SearchState::Idle,
            frontier: Frontier::new(),
            endpoints: None,
            closed_count: 0,
            expansions: 0,
        }
    }

    /// Read access to cells for display
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give back the grid, keeping the search state written so far
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Number of expansions performed in the current run
    pub const fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of cells waiting in the frontier
    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of expanded cells
    pub const fn closed_len(&self) -> usize {
        self.closed_count
    }

    /// Read access to the ranked frontier
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Start and target of the current run, if any
    pub const fn endpoints(&self) -> Option<(Coord, Coord)> {
        self.endpoints
    }

    /// Begin a run between two cells
    ///
    /// Clears the state of any previous run first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - either coordinate lies outside the grid
    /// - either cell is a wall
    /// - start and target are the same cell
    pub fn start(&mut self, start: Coord, target: Coord) -> Result<()> {
        self.check_endpoint("start", start)?;
        self.check_endpoint("target", target)?;
        if start == target {
            return Err(invalid_configuration(&format!(
                "start and target are the same cell {start}"
            )));
        }

        self.reset();

        let costs = Costs::new(0, heuristic(start, target));
        if let Some(cell) = self.grid.cell_at_mut(start) {
            cell.costs = costs;
            cell.visit = Visit::Open;
        }
        self.frontier.upsert(start, costs);
        self.endpoints = Some((start, target));
        self.state = SearchState::Running;

        debug!(
            "Search started from {start} to {target} on a {}x{} grid",
            self.grid.cols(),
            self.grid.rows()
        );
        Ok(())
    }

    /// Begin a run between the cells flagged as start and target
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if there is not exactly one start and
    /// exactly one target, or if [`SearchEngine::start`] rejects them
    pub fn start_from_flags(&mut self) -> Result<()> {
        let start = self.single_flagged(CellFlag::Start, "start")?;
        let target = self.single_flagged(CellFlag::Target, "target")?;
        self.start(start, target)
    }

    /// Expand the best frontier cell
    ///
    /// All cell updates of the expansion are applied before returning.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if the engine is not in the `Running` state
    pub fn step(&mut self) -> Result<StepReport> {
        let not_running = SearchError::NotRunning { state: self.state };
        if self.state != SearchState::Running {
            return Err(not_running);
        }
        let Some((_, target)) = self.endpoints else {
            return Err(not_running);
        };
        let Some(best) = self.frontier.pop_best() else {
            // Unreachable while Running: an empty frontier ends the run
            self.state = SearchState::Failed;
            return Err(SearchError::NotRunning { state: self.state });
        };

        let current = best.coord;
        let mut current_g = 0;
        if let Some(cell) = self.grid.cell_at_mut(current) {
            cell.visit = Visit::Closed;
            current_g = cell.costs.g;
        }
        self.closed_count += 1;
        self.expansions += 1;

        if current == target {
            self.state = SearchState::Succeeded;
            info!(
                "Target {target} reached after {} expansions, cost {current_g}",
                self.expansions
            );
            return Ok(StepReport {
                expanded: current,
                relaxed: 0,
                state: self.state,
            });
        }

        let mut relaxed = 0;
        for neighbor in self.grid.neighbors(current) {
            let Some(cell) = self.grid.cell_at_mut(neighbor) else {
                continue;
            };
            if cell.is_wall() || cell.visit == Visit::Closed {
                continue;
            }

            let tentative = current_g + step_cost(current, neighbor);
            if cell.visit != Visit::Open || tentative < cell.costs.g {
                cell.costs = Costs::new(tentative, heuristic(neighbor, target));
                cell.parent = Some(current);
                cell.visit = Visit::Open;
                self.frontier.upsert(neighbor, cell.costs);
                relaxed += 1;
            }
        }

        trace!(
            "Expanded {current} (f={}, h={}), relaxed {relaxed}, open {}",
            best.f,
            best.h,
            self.frontier.len()
        );

        if self.frontier.is_empty() {
            self.state = SearchState::Failed;
            info!(
                "No path to {target}: frontier exhausted after {} expansions",
                self.expansions
            );
        }

        Ok(StepReport {
            expanded: current,
            relaxed,
            state: self.state,
        })
    }

    /// Step until the run succeeds or fails
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if no run is in progress
    pub fn run(&mut self) -> Result<SearchState> {
        self.run_observed(|_, _| {})
    }

    /// Step until the run ends, handing every report to an observer
    ///
    /// The observer sees the engine after each step, which is where a driver
    /// paces or draws the search.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if no run is in progress
    pub fn run_observed<F>(&mut self, mut observer: F) -> Result<SearchState>
    where
        F: FnMut(&StepReport, &Self),
    {
        if self.state != SearchState::Running {
            return Err(SearchError::NotRunning { state: self.state });
        }
        while self.state == SearchState::Running {
            let report = self.step()?;
            observer(&report, &*self);
        }
        Ok(self.state)
    }

    /// Ordered cells from start to target, both inclusive
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the run has not succeeded (`NotSucceeded`)
    /// - parent links do not lead back to the start (`BrokenParentChain`)
    pub fn reconstruct_path(&self) -> Result<Vec<Coord>> {
        let not_succeeded = SearchError::NotSucceeded { state: self.state };
        if self.state != SearchState::Succeeded {
            return Err(not_succeeded);
        }
        let Some((start, target)) = self.endpoints else {
            return Err(not_succeeded);
        };

        let mut path = vec![target];
        let mut current = target;
        while current != start {
            if path.len() > self.grid.len() {
                return Err(SearchError::BrokenParentChain { at: current });
            }
            current = self
                .grid
                .cell_at(current)
                .and_then(|cell| cell.parent)
                .ok_or(SearchError::BrokenParentChain { at: current })?;
            path.push(current);
        }

        path.reverse();
        Ok(path)
    }

    /// Accumulated cost of the found path
    ///
    /// # Errors
    ///
    /// Returns `NotSucceeded` if the run has not succeeded
    pub fn path_cost(&self) -> Result<u32> {
        match (self.state, self.endpoints) {
            (SearchState::Succeeded, Some((_, target))) => Ok(self
                .grid
                .cell_at(target)
                .map_or(0, |cell| cell.costs.g)),
            _ => Err(SearchError::NotSucceeded { state: self.state }),
        }
    }

    /// Discard the current run and clear transient state on every cell
    ///
    /// Valid from any state; calling it repeatedly has no further effect.
    pub fn reset(&mut self) {
        self.grid.clear_search_state();
        self.frontier.clear();
        self.endpoints = None;
        self.closed_count = 0;
        self.expansions = 0;
        self.state = SearchState::Idle;
    }

    /// Apply a classification edit to one cell
    ///
    /// `Start` and `Target` use single-assignment placement, `Wall` toggles.
    /// An accepted edit made while a run is in progress or finished resets
    /// the engine to `Idle` before the grid changes. A refused edit leaves
    /// both the grid and the run untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the coordinate lies outside the grid (`OutOfBounds`)
    /// - the edit conflicts with the cell's classification (`CellOccupied`)
    pub fn apply_edit(&mut self, coord: Coord, flag: CellFlag) -> Result<()> {
        self.grid.check_edit(coord, flag)?;
        if self.state != SearchState::Idle {
            debug!("Edit at {coord} while {}: resetting search", self.state);
            self.reset();
        }
        match flag {
            CellFlag::Wall => self.grid.toggle_wall(coord),
            CellFlag::Start | CellFlag::Target => self.grid.set_unique(coord, flag),
        }
    }

    fn check_endpoint(&self, role: &str, coord: Coord) -> Result<()> {
        let cell = self.grid.cell_at(coord).ok_or_else(|| {
            invalid_configuration(&format!("{role} {coord} is outside the grid"))
        })?;
        if cell.is_wall() {
            return Err(invalid_configuration(&format!("{role} {coord} is a wall")));
        }
        Ok(())
    }

    fn single_flagged(&self, flag: CellFlag, role: &str) -> Result<Coord> {
        match self.grid.find_by_flag(flag).as_slice() {
            [coord] => Ok(*coord),
            [] => Err(invalid_configuration(&format!("no {role} cell is set"))),
            many => Err(invalid_configuration(&format!(
                "{} cells are flagged as {role}",
                many.len()
            ))),
        }
    }
}
