//! Text maze format
//!
//! ```text
//! size
//! 4
//! grid
//! S 1 1 0
//! 0 1 0 1
//! 1 1 G 1
//! 0 0 1 T
//! ```
//!
//! A `size` line is followed by the grid dimension; a `grid` line is followed
//! by `size * size` whitespace separated tokens in row-major order, which may
//! span any number of lines. Tokens are `S` (open start cell), `T` (open
//! target cell), `G` (gold coin) or a numeric [`CellState`] code `0..=4`.
//! Keywords and letters are case-insensitive; any other line is ignored.
//!
//! Without a `size` section the size defaults to 5. The start defaults to
//! `(0, 0)` and the target to the bottom-right corner.

use crate::cell::CellState;
use crate::error::ParseError;
use crate::grid::{Grid, cell_count};
use crate::position::Position;
use crate::solver::MazeSolver;
use std::str::FromStr;

const DEFAULT_SIZE: usize = 5;

/// Parse a maze in the text format described in the module docs.
pub fn parse_maze(input: &str) -> Result<MazeSolver, ParseError> {
    let mut tokens = Tokens::new(input);
    let mut size = DEFAULT_SIZE;
    let mut start = Position::new(0, 0);
    let mut target = corner(size)?;
    let mut grid = None;

    while let Some(line) = tokens.next_line() {
        let keyword = line.trim();
        if keyword.eq_ignore_ascii_case("size") {
            size = parse_size(&mut tokens)?;
            target = corner(size)?;
        } else if keyword.eq_ignore_ascii_case("grid") {
            let parsed = parse_grid(&mut tokens, size)?;
            if let Some(pos) = parsed.start {
                start = pos;
            }
            if let Some(pos) = parsed.target {
                target = pos;
            }
            grid = Some(parsed.grid);
        }
    }

    let grid = grid.ok_or_else(|| ParseError::MissingData("grid section".to_string()))?;
    Ok(MazeSolver::new(grid, start, target))
}

impl FromStr for MazeSolver {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}

struct ParsedGrid {
    grid: Grid,
    start: Option<Position>,
    target: Option<Position>,
}

fn parse_size(tokens: &mut Tokens<'_>) -> Result<usize, ParseError> {
    let token = tokens
        .next_token()
        .ok_or_else(|| ParseError::MissingData("grid size".to_string()))?;
    let size = token
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidFormat(format!("invalid grid size '{}'", token)))?;
    if size == 0 {
        return Err(ParseError::Empty);
    }
    cell_count(size)?;
    Ok(size)
}

/// Rows are only allocated as their tokens arrive, so a huge declared size
/// with a short grid fails on missing data rather than on allocation.
fn parse_grid(tokens: &mut Tokens<'_>, size: usize) -> Result<ParsedGrid, ParseError> {
    let mut rows = Vec::new();
    let mut start = None;
    let mut target = None;

    for row in 0..size {
        let mut cells = Vec::new();
        for col in 0..size {
            let token = tokens.next_token().ok_or_else(|| {
                ParseError::MissingData(format!(
                    "grid ends at row {}, column {} of a {}x{} maze",
                    row, col, size, size
                ))
            })?;
            let pos = coordinate(row, col)?;
            let state = match token {
                t if t.eq_ignore_ascii_case("S") => {
                    start = Some(pos);
                    CellState::Open
                }
                t if t.eq_ignore_ascii_case("T") => {
                    target = Some(pos);
                    CellState::Open
                }
                t if t.eq_ignore_ascii_case("G") => CellState::GoldCoin,
                t => t
                    .parse::<usize>()
                    .ok()
                    .and_then(CellState::from_code)
                    .ok_or_else(|| ParseError::InvalidCell {
                        token: t.to_string(),
                        row,
                        col,
                    })?,
            };
            cells.push(state);
        }
        rows.push(cells);
    }

    Ok(ParsedGrid {
        grid: Grid::from_rows(rows)?,
        start,
        target,
    })
}

fn coordinate(row: usize, col: usize) -> Result<Position, ParseError> {
    match (i32::try_from(row), i32::try_from(col)) {
        (Ok(r), Ok(c)) => Ok(Position::new(r, c)),
        _ => Err(ParseError::InvalidFormat(format!(
            "coordinate ({}, {}) is too large",
            row, col
        ))),
    }
}

fn corner(size: usize) -> Result<Position, ParseError> {
    coordinate(size - 1, size - 1)
}

/// Cursor over the input that hands out either whole lines or single tokens.
///
/// Reading tokens consumes the line they were found on; whatever is left of
/// that line is dropped, so the next `next_line` starts on a fresh line.
struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    pending: Option<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            pending: None,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        self.pending = None;
        self.lines.next()
    }

    fn next_token(&mut self) -> Option<&'a str> {
        loop {
            if let Some(token) = self.pending.as_mut().and_then(Iterator::next) {
                return Some(token);
            }
            self.pending = Some(self.lines.next()?.split_whitespace());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    #[test]
    fn test_parse_with_markers() {
        let maze = parse_maze("size\n2\ngrid\nS 0\nG T\n").unwrap();
        assert_eq!(maze.size(), 2);
        assert_eq!(maze.start(), Position::new(0, 0));
        assert_eq!(maze.target(), Position::new(1, 1));
        assert_eq!(maze.cell(Position::new(0, 0)), Some(CellState::Open));
        assert_eq!(maze.cell(Position::new(0, 1)), Some(CellState::Wall));
        assert_eq!(maze.cell(Position::new(1, 0)), Some(CellState::GoldCoin));
        assert_eq!(maze.cell(Position::new(1, 1)), Some(CellState::Open));
    }

    #[test]
    fn test_markers_override_defaults() {
        let maze = parse_maze("SIZE\n3\nGrid\n1 1 t\n1 0 1\n1 s g\n").unwrap();
        assert_eq!(maze.start(), Position::new(2, 1));
        assert_eq!(maze.target(), Position::new(0, 2));
        assert_eq!(maze.cell(Position::new(2, 2)), Some(CellState::GoldCoin));
    }

    #[test]
    fn test_defaults_without_markers() {
        let maze = parse_maze("size\n2\ngrid\n1 1\n1 1\n").unwrap();
        assert_eq!(maze.start(), Position::new(0, 0));
        assert_eq!(maze.target(), Position::new(1, 1));
    }

    #[test]
    fn test_default_size_is_five() {
        let row = "1 1 1 1 1\n";
        let maze = parse_maze(&format!("grid\n{}", row.repeat(5))).unwrap();
        assert_eq!(maze.size(), 5);
        assert_eq!(maze.target(), Position::new(4, 4));
    }

    #[test]
    fn test_grid_tokens_span_lines() {
        let maze = parse_maze("size\n2\ngrid\n1 0 4\n3\n").unwrap();
        assert_eq!(maze.cell(Position::new(1, 0)), Some(CellState::GoldCoin));
        assert_eq!(maze.cell(Position::new(1, 1)), Some(CellState::Path));
    }

    #[test]
    fn test_other_lines_ignored() {
        let input = "# sample maze\nsize\n1\n\nnotes: tiny\ngrid\nS\ntrailing text\n";
        let maze = parse_maze(input).unwrap();
        assert_eq!(maze.size(), 1);
    }

    #[test]
    fn test_huge_size_with_short_grid() {
        let err = parse_maze("size\n2000000000\ngrid\n1\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingData(_)));
    }

    #[test]
    fn test_size_beyond_addressable_range() {
        let overflowing = format!("size\n{}\ngrid\n1\n", usize::MAX);
        assert!(matches!(
            parse_maze(&overflowing),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_maze("size\n3000000000\ngrid\n1\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_size_on_same_line_as_rest_is_dropped() {
        let maze = parse_maze("size\n1 grid\ngrid\n1\n").unwrap();
        assert_eq!(maze.size(), 1);
    }

    #[test]
    fn test_missing_grid() {
        assert_eq!(
            parse_maze("size\n3\n"),
            Err(ParseError::MissingData("grid section".to_string()))
        );
    }

    #[test]
    fn test_short_grid() {
        assert!(matches!(
            parse_maze("size\n2\ngrid\n1 1\n1\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(
            parse_maze("size\n2\ngrid\n1 1\n1 7\n"),
            Err(ParseError::InvalidCell {
                token: "7".to_string(),
                row: 1,
                col: 1
            })
        );
        assert!(matches!(
            parse_maze("size\n2\ngrid\nX 1\n1 1\n"),
            Err(ParseError::InvalidCell { row: 0, col: 0, .. })
        ));
        assert!(matches!(
            parse_maze("size\nten\ngrid\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(parse_maze("size\n0\ngrid\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_from_str() {
        let maze: MazeSolver = "size\n1\ngrid\nS\n".parse().unwrap();
        assert_eq!(maze.render(), "[ S ]\n");
    }
}
