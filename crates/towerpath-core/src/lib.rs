//! **towerpath-core** — grid instances, moves and geometry for the towerpath
//! solver.
//!
//! This crate provides the foundational types shared across the *towerpath*
//! workspace: geometry primitives, the `n × n` [`Grid`] of open/tower cells,
//! the plain-text instance format, and the [`Move`] vocabulary used for
//! reporting paths.

pub mod geom;
pub mod grid;
pub mod instance;
pub mod moves;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Cell, Grid, GridError};
pub use instance::ParseInstanceError;
pub use moves::{Move, moves_to_string};
