//! The plain-text instance format.
//!
//! ```text
//! <n>
//! <row_0>      n characters, '.' (open) or 'T' (tower)
//! ...
//! <row_{n-1}>
//! ```
//!
//! [`Grid`] implements [`FromStr`] for reading instance files and
//! [`Display`](fmt::Display) for writing them back out in the same format.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use thiserror::Error;

use crate::grid::{Cell, Grid, GridError};

/// Error produced when instance text does not describe a well-formed grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInstanceError {
    #[error("missing size line")]
    MissingSize,
    #[error("invalid size line {line:?}")]
    InvalidSize { line: String },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell {rune:?} at row {row}, column {col}")]
    InvalidRune { rune: char, row: usize, col: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl FromStr for Grid {
    type Err = ParseInstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim_end);

        let size_line = lines.next().ok_or(ParseInstanceError::MissingSize)?;
        let size: i32 =
            size_line
                .trim()
                .parse()
                .map_err(|_| ParseInstanceError::InvalidSize {
                    line: size_line.to_string(),
                })?;
        if size < 1 {
            return Err(GridError::BadSize(size).into());
        }
        let n = size as usize;

        // Trailing blank lines are tolerated; anything else must be a row.
        let rows: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
        if rows.len() != n {
            return Err(ParseInstanceError::RowCount {
                expected: n,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != n {
                return Err(ParseInstanceError::RowLength {
                    row,
                    expected: n,
                    found,
                });
            }
            for (col, rune) in line.chars().enumerate() {
                let cell =
                    Cell::from_rune(rune).ok_or(ParseInstanceError::InvalidRune {
                        rune,
                        row,
                        col,
                    })?;
                cells.push(cell);
            }
        }

        Ok(Grid::new(size, cells)?)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size())?;
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.rune())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
