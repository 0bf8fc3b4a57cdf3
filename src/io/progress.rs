//! Expansion progress display for paced searches

use crate::algorithm::engine::{SearchState, StepReport};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks expansions against the number of passable cells
///
/// The bar length is an upper bound: a successful search usually stops well
/// before every passable cell is expanded.
pub struct SearchProgress {
    bar: ProgressBar,
    expansions: u64,
}

impl SearchProgress {
    /// Create a visible progress bar for a search over `passable` cells
    pub fn new(passable: usize) -> Self {
        let bar = ProgressBar::new(passable as u64);
        bar.set_style(Self::style());
        Self { bar, expansions: 0 }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(passable: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(passable as u64);
        Self { bar, expansions: 0 }
    }

    /// Record one expansion
    pub fn record(&mut self, report: &StepReport, open_len: usize) {
        self.expansions += 1;
        self.bar.set_position(self.expansions);
        self.bar
            .set_message(format!("{} open {open_len}", report.expanded));
    }

    /// Number of expansions recorded so far
    pub const fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Close the bar with the terminal state of the run
    pub fn finish(&self, state: SearchState) {
        self.bar.finish_with_message(format!("search {state}"));
    }

    fn style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
