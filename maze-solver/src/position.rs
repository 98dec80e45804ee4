//! Grid coordinates and orthogonal moves

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// One of the four orthogonal moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Exploration order shared by both engines. Results depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row and column delta for one step
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// An immutable (row, column) coordinate.
///
/// Positions carry no bounds information: negative or oversized values are
/// legal here and are rejected by the grid that is asked about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// The neighbor one step away, or `None` if the coordinate would overflow.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        Some(Position::new(
            self.row.checked_add(dr)?,
            self.col.checked_add(dc)?,
        ))
    }

    /// Neighbors in North, East, South, West order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, optionally wrapped in parentheses and padded with spaces.
impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);

        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidFormat(format!("expected 'row,col', got '{}'", s)))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| ParseError::InvalidFormat(format!("invalid coordinate '{}'", part.trim())))
        };

        Ok(Position::new(parse(row)?, parse(col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Position::new(-1, -1).to_string(), "(-1, -1)");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
        assert_eq!(Position::from((4, 5)), Position::new(4, 5));
    }

    #[test]
    fn test_neighbors_order() {
        let neighbors: Vec<_> = Position::new(1, 1).neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_step_overflow() {
        assert_eq!(Position::new(i32::MIN, 0).step(Direction::North), None);
        assert_eq!(Position::new(0, i32::MAX).step(Direction::East), None);
        assert_eq!(
            Position::new(0, 0).step(Direction::West),
            Some(Position::new(0, -1))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2,3".parse::<Position>().unwrap(), Position::new(2, 3));
        assert_eq!(" ( 0 , 4 ) ".parse::<Position>().unwrap(), Position::new(0, 4));
        assert_eq!("-1,0".parse::<Position>().unwrap(), Position::new(-1, 0));
        assert!("2".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
    }
}
