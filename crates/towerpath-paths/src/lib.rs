//! Damage-aware pathfinding for towerpath grids.
//!
//! This crate implements the algorithmic core of the solver:
//!
//! - **Damage map** derivation from grid topology ([`DamageMap::build`])
//! - **A\*** minimum-damage search with deterministic tie-breaking
//!   ([`Search::astar`])
//! - **Path reconstruction** from the predecessor relation
//!   ([`Search::path_to_goal`])
//! - **BFS** start-to-goal connectivity check ([`Search::connected`])
//!
//! All searches operate through [`Search`], which owns and reuses internal
//! buffers so that repeated queries over a batch of instances incur no
//! allocations after warm-up.

mod astar;
mod bfs;
mod damage;
mod distance;
mod search;

pub use damage::{DamageMap, TOWER_DAMAGE};
pub use distance::manhattan;
pub use search::{Route, Search, UNREACHABLE};
