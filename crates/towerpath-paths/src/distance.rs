use towerpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Used as the A* heuristic: with per-cell damage ≥ 0 it never overestimates
/// the remaining cost, and it is consistent, so the first time the goal is
/// expanded its cost is final.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
