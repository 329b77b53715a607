//! The [`Move`] vocabulary for reporting paths.

use std::fmt;

use crate::geom::Point;

/// A unit move between two cardinally adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    /// All moves, in the order neighbours are expanded (up, right, down,
    /// left — matching [`Point::neighbors_4`]).
    pub const ALL: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    /// The coordinate offset of this move. North decreases the row.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::North => Point::new(0, -1),
            Move::South => Point::new(0, 1),
            Move::East => Point::new(1, 0),
            Move::West => Point::new(-1, 0),
        }
    }

    /// The cell reached by taking this move from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// Single-letter representation used in result files.
    pub const fn rune(self) -> char {
        match self {
            Move::North => 'N',
            Move::South => 'S',
            Move::East => 'E',
            Move::West => 'W',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rune())
    }
}

/// Format a move sequence as a result-file line (without the newline).
pub fn moves_to_string(moves: &[Move]) -> String {
    moves.iter().map(|m| m.rune()).collect()
}
