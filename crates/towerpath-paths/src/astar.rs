use std::collections::BinaryHeap;

use towerpath_core::{Move, Point};

use crate::damage::DamageMap;
use crate::distance::manhattan;
use crate::search::{HeapEntry, Route, Search, UNREACHABLE};

impl Search {
    /// Run the minimum-damage A* search from the top-left corner to the
    /// bottom-right corner of `dmg`.
    ///
    /// Returns the minimum cumulative damage, or [`UNREACHABLE`] when no
    /// path exists (an expected outcome, not an error). Damage is accumulated
    /// on arrival at each cell, so the start cell's own entry never counts.
    ///
    /// The frontier is ordered by `(estimated total, cost so far, row, col)`,
    /// a deterministic total order: re-running the search always reproduces
    /// the same cost table and predecessor relation.
    pub fn astar(&mut self, dmg: &DamageMap) -> i32 {
        self.set_size(dmg.size());
        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start = Point::ZERO;
        let goal = self.goal();

        // A tower on either endpoint rules out every path immediately.
        if dmg.at(start).is_none() || dmg.at(goal).is_none() {
            return UNREACHABLE;
        }
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return UNREACHABLE;
        };

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.step = None;
            node.generation = cur_gen;
            node.open = true;
        }

        if start_idx == goal_idx {
            self.nodes[start_idx].open = false;
            return 0;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            f: manhattan(start, goal),
            g: 0,
            idx: start_idx,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries (lazy deletion of superseded pushes).
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            // The heuristic is consistent, so the first expansion of the
            // goal carries its final cost.
            if ci == goal_idx {
                return current_g;
            }

            let cp = self.point(ci);
            for m in Move::ALL {
                let np = m.apply(cp);
                // Towers and out-of-bounds cells have no damage entry.
                let Some(d) = dmg.at(np) else {
                    continue;
                };
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + d;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.parent = ci;
                n.step = Some(m);
                n.open = true;

                open.push(HeapEntry {
                    f: tentative + manhattan(np, goal),
                    g: tentative,
                    idx: ni,
                });
            }
        }

        UNREACHABLE
    }

    /// Query the cost table produced by the last [`astar`](Search::astar)
    /// run.
    ///
    /// Returns [`UNREACHABLE`] for cells the search never reached, or for
    /// points outside the grid.
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }

    /// Reconstruct the move sequence of the last [`astar`](Search::astar)
    /// run by walking the predecessor relation back from the goal.
    ///
    /// Empty when the goal was not reached, and also for the trivial
    /// instance where start and goal coincide; [`route`](Search::route)
    /// keeps the two cases apart.
    pub fn path_to_goal(&self) -> Vec<Move> {
        let Some(goal_idx) = self.idx(self.goal()) else {
            return Vec::new();
        };
        if self.nodes[goal_idx].generation != self.generation {
            return Vec::new();
        }

        let mut moves = Vec::new();
        let mut ci = goal_idx;
        while self.nodes[ci].parent != usize::MAX {
            if let Some(m) = self.nodes[ci].step {
                moves.push(m);
            }
            ci = self.nodes[ci].parent;
        }
        moves.reverse();
        moves
    }

    /// Solve an instance end to end: search, then reconstruct.
    ///
    /// `None` means the goal is unreachable. A `Some` route with no moves is
    /// the trivial 1×1 instance, solved at cost 0.
    pub fn route(&mut self, dmg: &DamageMap) -> Option<Route> {
        let damage = self.astar(dmg);
        if damage == UNREACHABLE {
            return None;
        }
        Some(Route {
            moves: self.path_to_goal(),
            damage,
        })
    }
}
