//! Tests for parsing and rendering text layouts

#[cfg(test)]
mod tests {
    use pathgrid::SearchEngine;
    use pathgrid::SearchError;
    use pathgrid::io::layout::{Overlay, load_layout, parse_layout, render_costs, render_layout};
    use pathgrid::spatial::cell::{CellFlag, Coord};
    use std::io::Write;

    // Tests every symbol maps to the right classification
    // Verified by swapping start and target characters
    #[test]
    fn test_parse_classifications() {
        let grid = parse_layout("S.#\n.#T\n")
            .unwrap_or_else(|error| unreachable!("layout should parse: {error}"));

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.find_by_flag(CellFlag::Start), vec![Coord::new(0, 0)]);
        assert_eq!(grid.find_by_flag(CellFlag::Target), vec![Coord::new(2, 1)]);
        assert_eq!(
            grid.find_by_flag(CellFlag::Wall),
            vec![Coord::new(2, 0), Coord::new(1, 1)]
        );
    }

    // Tests comments, blank lines and trailing whitespace are ignored
    // Verified by counting comment lines as rows
    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let text = "; maze\n\nS..  \n; middle\n..T\n\n";
        let grid = parse_layout(text);
        assert_eq!(grid.map(|grid| grid.dimensions()).ok(), Some((3, 2)));
    }

    // Tests ragged rows report the offending source line
    // Verified by reporting the row index instead of the line number
    #[test]
    fn test_parse_rejects_ragged_rows() {
        match parse_layout("; header\nS..\n..\n") {
            Err(SearchError::LayoutParse { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 3"));
            }
            other => unreachable!("Expected LayoutParse, got {other:?}"),
        }
    }

    // Tests unknown characters, duplicate endpoints and empty input are rejected
    // Verified by letting a second start silently replace the first
    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_layout("S.x\n"),
            Err(SearchError::LayoutParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_layout("S..\n..S\n"),
            Err(SearchError::LayoutParse { line: 2, .. })
        ));
        assert!(matches!(
            parse_layout("T\nT\n"),
            Err(SearchError::LayoutParse { line: 2, .. })
        ));
        assert!(matches!(
            parse_layout("; nothing here\n\n"),
            Err(SearchError::LayoutParse { line: 0, .. })
        ));
    }

    // Tests rendering a freshly parsed grid reproduces the layout
    // Verified by rendering walls as open cells
    #[test]
    fn test_render_reproduces_layout() {
        let text = "S..#\n.#..\n...T\n";
        let rendered = parse_layout(text)
            .map(|grid| render_layout(&grid, Overlay::default()))
            .unwrap_or_default();
        assert_eq!(rendered, text);
    }

    // Tests the path overlay marks intermediate cells but keeps endpoints
    // Verified by drawing the path over the start
    #[test]
    fn test_render_path_overlay() {
        let Ok(grid) = parse_layout("S..\n.#.\n..T\n") else {
            unreachable!("layout should parse");
        };
        let mut engine = SearchEngine::new(grid);
        assert!(engine.start_from_flags().is_ok());
        assert!(engine.run().is_ok());
        let path = engine.reconstruct_path().unwrap_or_default();

        let plain = render_layout(
            engine.grid(),
            Overlay {
                path: &path,
                show_search: false,
            },
        );
        assert_eq!(plain, "S*.\n.#*\n..T\n");

        let explored = render_layout(
            engine.grid(),
            Overlay {
                path: &path,
                show_search: true,
            },
        );
        assert_eq!(explored, "S*o\no#*\n.oT\n");
    }

    // Tests the cost table lists touched cells with their parents
    // Verified by listing unvisited cells
    #[test]
    fn test_render_costs() {
        let Ok(grid) = parse_layout("S.T\n") else {
            unreachable!("layout should parse");
        };
        let mut engine = SearchEngine::new(grid);
        assert!(engine.start_from_flags().is_ok());
        assert!(engine.run().is_ok());

        let table = render_costs(engine.grid());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            vec![
                "(0, 0) g=0 h=20 f=20 parent=-",
                "(1, 0) g=10 h=10 f=20 parent=(0, 0)",
                "(2, 0) g=20 h=0 f=20 parent=(1, 0)",
            ]
        );
    }

    // Tests layouts load from disk and missing files report the path
    // Verified by discarding the path in the error
    #[test]
    fn test_load_layout_from_file() {
        let dir = tempfile::tempdir();
        let Ok(dir) = dir else {
            unreachable!("temporary directory should be available");
        };
        let path = dir.path().join("board.txt");
        let written = std::fs::File::create(&path)
            .and_then(|mut file| file.write_all(b"S.\n.T\n"));
        assert!(written.is_ok());

        let grid = load_layout(&path);
        assert_eq!(grid.map(|grid| grid.len()).ok(), Some(4));

        let missing = dir.path().join("missing.txt");
        match load_layout(&missing) {
            Err(SearchError::FileSystem { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
