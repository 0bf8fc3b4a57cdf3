//! Tests for command-line parsing and the search runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pathgrid::SearchError;
    use pathgrid::SearchState;
    use pathgrid::io::cli::{Cli, SearchRunner, SearchSummary, parse_coord};
    use pathgrid::io::configuration::{
        ANIMATION_STEP_DELAY_MS, DEFAULT_SEED, DEFAULT_STEP_DELAY_MS, DEFAULT_WALL_DENSITY,
    };
    use pathgrid::spatial::cell::Coord;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn run(args: &[&str]) -> (pathgrid::Result<SearchSummary>, String) {
        let runner = SearchRunner::new(Cli::parse_from(args));
        let mut out = Vec::new();
        let result = runner.run_with_writer(&mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    fn write_layout(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        assert!(std::fs::write(&path, text).is_ok());
        path
    }

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.layout, None);
        assert_eq!(cli.start, None);
        assert_eq!(cli.target, None);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!((cli.walls - DEFAULT_WALL_DENSITY).abs() < f64::EPSILON);
        assert_eq!(cli.delay_ms, DEFAULT_STEP_DELAY_MS);
        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying the coordinate parser to swap axes
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "--width", "20", "--height", "10", "--start", "1,2", "--target", "19,9",
            "--walls", "0.25", "--seed", "7", "--delay-ms", "5", "--explored", "--costs",
            "--quiet",
        ]);

        assert_eq!(cli.width, Some(20));
        assert_eq!(cli.height, Some(10));
        assert_eq!(cli.start, Some(Coord::new(1, 2)));
        assert_eq!(cli.target, Some(Coord::new(19, 9)));
        assert!((cli.walls - 0.25).abs() < f64::EPSILON);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.step_delay(), Duration::from_millis(5));
        assert!(cli.explored);
        assert!(cli.costs);
        assert!(!cli.should_show_progress());
    }

    // Tests the animation flag overrides the step delay and conflicts with an explicit one
    // Verified by ignoring the animate flag
    #[test]
    fn test_animate_pacing() {
        let cli = Cli::parse_from(["program", "--animate"]);
        assert_eq!(
            cli.step_delay(),
            Duration::from_millis(ANIMATION_STEP_DELAY_MS)
        );
        assert!(Cli::try_parse_from(["program", "--animate", "--delay-ms", "3"]).is_err());
        assert!(Cli::try_parse_from(["program", "board.txt", "--width", "3"]).is_err());
    }

    // Tests coordinate parsing accepts spaces and rejects malformed pairs
    // Verified by accepting a missing row
    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok(Coord::new(3, 4)));
        assert_eq!(parse_coord(" 0 , 7 "), Ok(Coord::new(0, 7)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("3,").is_err());
        assert!(parse_coord("-1,2").is_err());
        assert!(Cli::try_parse_from(["program", "--start", "a,b"]).is_err());
    }

    // Tests a layout file run prints the path overlay and summary
    // Verified by printing the layout before the search
    #[test]
    fn test_run_layout_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let layout = write_layout(dir.path(), "board.txt", "S..\n.#.\n..T\n");
        let layout = layout.to_string_lossy().into_owned();

        let (result, output) = run(&["program", layout.as_str(), "--quiet"]);

        let summary = result.ok();
        assert_eq!(
            summary.as_ref().map(|s| (s.state, s.cost, s.path.len())),
            Some((SearchState::Succeeded, Some(34), 4))
        );
        assert_eq!(
            output,
            "S*.\n.#*\n..T\n\nstate: succeeded\nexpansions: 4\npath length: 4 cells\npath cost: 34\n"
        );
    }

    // Tests generated grids default to opposite corners
    // Verified by defaulting the target to the start
    #[test]
    fn test_run_generated_grid_corners() {
        let (result, output) = run(&["program", "--width", "3", "--height", "1", "--quiet"]);

        let summary = result.ok();
        assert_eq!(
            summary.map(|s| s.path),
            Some(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)])
        );
        assert!(output.starts_with("S*T\n"));
        assert!(output.contains("path cost: 20"));
    }

    // Tests explicit coordinates move the endpoints of a layout
    // Verified by applying the start before loading the layout
    #[test]
    fn test_run_start_override() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let layout = write_layout(dir.path(), "open.txt", "S..\n...\n..T\n");
        let layout = layout.to_string_lossy().into_owned();

        let (result, output) = run(&["program", layout.as_str(), "--start", "2,0", "-q"]);

        assert_eq!(result.ok().and_then(|s| s.cost), Some(20));
        assert!(output.starts_with("..S\n..*\n..T\n"));
    }

    // Tests an enclosed target is reported as a failed search, not an error
    // Verified by returning an error on Failed
    #[test]
    fn test_run_enclosed_target() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be available");
        };
        let layout = write_layout(
            dir.path(),
            "enclosed.txt",
            "S....\n.###.\n.#T#.\n.###.\n.....\n",
        );
        let layout = layout.to_string_lossy().into_owned();

        let (result, output) = run(&["program", layout.as_str(), "--quiet", "--costs"]);

        let summary = result.ok();
        assert_eq!(summary.as_ref().map(|s| s.state), Some(SearchState::Failed));
        assert_eq!(summary.as_ref().map(|s| s.path.is_empty()), Some(true));
        assert!(output.contains("no path between start and target"));
        assert!(output.contains("(0, 0) g=0"));
    }

    // Tests seeded walls give identical runs
    // Verified by reseeding from the clock
    #[test]
    fn test_run_seeded_walls_reproducible() {
        let args = [
            "program", "--width", "16", "--height", "12", "--walls", "0.3", "--seed", "11",
            "--explored", "-q",
        ];
        let (first, first_output) = run(&args);
        let (second, second_output) = run(&args);

        assert!(first.is_ok());
        assert_eq!(first.ok(), second.ok());
        assert_eq!(first_output, second_output);
    }

    // Tests configuration problems surface as errors
    // Verified by clamping coordinates into the grid
    #[test]
    fn test_run_invalid_configuration() {
        let (result, output) = run(&["program", "--width", "4", "--target", "0,0", "-q"]);
        assert!(matches!(
            result,
            Err(SearchError::InvalidConfiguration { .. })
        ));
        assert!(output.is_empty());

        let (result, _) = run(&["program", "--width", "4", "--start", "9,9", "-q"]);
        assert!(matches!(result, Err(SearchError::OutOfBounds { .. })));

        let (result, _) = run(&["program", "--width", "0", "-q"]);
        assert!(matches!(result, Err(SearchError::InvalidParameter { .. })));

        let (result, _) = run(&["program", "/definitely/not/here.txt", "-q"]);
        assert!(matches!(result, Err(SearchError::FileSystem { .. })));
    }
}
