//! Damage map derivation from grid topology.

use towerpath_core::{Cell, Grid, Point, Range};

/// Damage dealt by each adjacent tower when entering a cell.
pub const TOWER_DAMAGE: i32 = 10;

/// Per-cell traversal costs derived from a [`Grid`].
///
/// Each open cell carries `TOWER_DAMAGE ×` the number of towers among its
/// up-to-eight in-bounds neighbours; tower cells have no entry and are
/// impassable. Built once per grid, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageMap {
    size: i32,
    cells: Vec<Option<i32>>,
}

impl DamageMap {
    /// Derive the damage map for a grid. Total over any well-formed grid.
    pub fn build(grid: &Grid) -> Self {
        let bounds = grid.bounds();
        let mut cells = Vec::with_capacity(bounds.len());
        for p in bounds.iter() {
            let entry = match grid.at(p) {
                Some(Cell::Open) => {
                    let towers = p
                        .neighbors_8()
                        .iter()
                        .filter(|&&q| grid.at(q) == Some(Cell::Tower))
                        .count() as i32;
                    Some(TOWER_DAMAGE * towers)
                }
                _ => None,
            };
            cells.push(entry);
        }
        Self {
            size: grid.size(),
            cells,
        }
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

    /// The damage on entering `p`, or `None` when `p` is a tower cell or out
    /// of bounds.
    pub fn at(&self, p: Point) -> Option<i32> {
        if !self.bounds().contains(p) {
            return None;
        }
        self.cells[(p.y * self.size + p.x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_has_zero_damage() {
        let g: Grid = "3\n...\n...\n...\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        for p in dmg.bounds().iter() {
            assert_eq!(dmg.at(p), Some(0));
        }
    }

    #[test]
    fn center_tower_hits_all_eight_neighbors() {
        let g: Grid = "3\n...\n.T.\n...\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        assert_eq!(dmg.at(Point::new(1, 1)), None);
        for p in dmg.bounds().iter() {
            if p != Point::new(1, 1) {
                assert_eq!(dmg.at(p), Some(TOWER_DAMAGE));
            }
        }
    }

    #[test]
    fn corner_tower_clamps_at_bounds() {
        let g: Grid = "2\nT.\n..\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        assert_eq!(dmg.at(Point::new(0, 0)), None);
        // Every other cell touches the corner tower exactly once.
        assert_eq!(dmg.at(Point::new(1, 0)), Some(10));
        assert_eq!(dmg.at(Point::new(0, 1)), Some(10));
        assert_eq!(dmg.at(Point::new(1, 1)), Some(10));
    }

    #[test]
    fn surrounded_cell_takes_maximum_damage() {
        let g: Grid = "3\nTTT\nT.T\nTTT\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        assert_eq!(dmg.at(Point::new(1, 1)), Some(80));
    }

    #[test]
    fn entries_are_bounded_multiples_of_ten() {
        let g: Grid = "5\n..T..\nT...T\n..T..\n.T.T.\nT....\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        for p in dmg.bounds().iter() {
            match dmg.at(p) {
                Some(d) => {
                    assert!((0..=80).contains(&d));
                    assert_eq!(d % TOWER_DAMAGE, 0);
                }
                None => assert_eq!(g.at(p), Some(Cell::Tower)),
            }
        }
    }

    #[test]
    fn out_of_bounds_has_no_entry() {
        let g: Grid = "2\n..\n..\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        assert_eq!(dmg.at(Point::new(-1, 0)), None);
        assert_eq!(dmg.at(Point::new(2, 1)), None);
    }

    #[test]
    fn adjacent_towers_stack() {
        let g: Grid = "3\nT.T\n...\n.T.\n".parse().unwrap();
        let dmg = DamageMap::build(&g);
        // (1,0) touches both top towers.
        assert_eq!(dmg.at(Point::new(1, 0)), Some(20));
        // (1,1) touches all three.
        assert_eq!(dmg.at(Point::new(1, 1)), Some(30));
        // (0,2) touches only the bottom tower.
        assert_eq!(dmg.at(Point::new(0, 2)), Some(10));
    }
}
