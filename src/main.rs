//! CLI entry point for running grid searches from the terminal

use clap::Parser;
use pathgrid::io::cli::{Cli, SearchRunner};

fn main() -> pathgrid::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = SearchRunner::new(cli);
    runner.run()
}
