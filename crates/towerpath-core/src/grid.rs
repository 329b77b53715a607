//! The [`Grid`] type — an immutable `n × n` matrix of [`Cell`] states.

use thiserror::Error;

use crate::geom::{Point, Range};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Walkable ground.
    #[default]
    Open,
    /// An impassable tower.
    Tower,
}

impl Cell {
    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Character representation of the cell in the instance format.
    pub const fn rune(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Tower => 'T',
        }
    }

    /// Parse a cell from its instance-format character.
    pub const fn from_rune(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Open),
            'T' => Some(Cell::Tower),
            _ => None,
        }
    }
}

/// Error rejecting a malformed grid at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be at least 1, got {0}")]
    BadSize(i32),
    #[error("expected {expected} cells for a {size}x{size} grid, got {got}")]
    CellCount {
        size: i32,
        expected: usize,
        got: usize,
    },
}

/// An immutable `n × n` grid of [`Cell`] states, stored row-major.
///
/// The problem endpoints are fixed: paths start at the top-left corner
/// ([`start`](Grid::start)) and end at the bottom-right corner
/// ([`goal`](Grid::goal)).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells, rejecting malformed input.
    pub fn new(size: i32, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::BadSize(size));
        }
        let expected = (size as usize) * (size as usize);
        if cells.len() != expected {
            return Err(GridError::CellCount {
                size,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// The side length `n`.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The bounding range `[0, n) × [0, n)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size, self.size)
    }

    /// The fixed start cell, top-left.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The fixed goal cell, bottom-right.
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.size - 1, self.size - 1)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.size + p.x) as usize])
    }

    /// Row-major iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds()
            .iter()
            .zip(self.cells.iter())
            .map(|(p, &c)| (p, c))
    }
}
