//! Breadth-first start-to-goal connectivity.

use towerpath_core::{Cell, Grid};

use crate::search::Search;

impl Search {
    /// Whether the goal corner is reachable from the start corner through
    /// open cells, moving in the four cardinal directions.
    ///
    /// This is the cheap pre-check used by the instance generator; the A*
    /// search does not rely on it and detects unreachable goals on its own.
    /// Running it invalidates any previous A* state in this coordinator.
    pub fn connected(&mut self, grid: &Grid) -> bool {
        self.set_size(grid.size());

        let start = grid.start();
        let goal = grid.goal();
        if !grid.at(start).is_some_and(Cell::is_open) || !grid.at(goal).is_some_and(Cell::is_open)
        {
            return false;
        }
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            return false;
        };

        let len = self.bounds().len();
        self.bfs_seen.clear();
        self.bfs_seen.resize(len, false);

        let mut queue = std::mem::take(&mut self.bfs_queue);
        queue.clear();
        queue.push_back(start_idx);
        self.bfs_seen[start_idx] = true;

        let mut found = false;
        while let Some(ci) = queue.pop_front() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let cp = self.point(ci);
            for np in cp.neighbors_4() {
                if !grid.at(np).is_some_and(Cell::is_open) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if !self.bfs_seen[ni] {
                    self.bfs_seen[ni] = true;
                    queue.push_back(ni);
                }
            }
        }

        self.bfs_queue = queue;
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageMap;
    use crate::search::UNREACHABLE;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn open_grid_is_connected() {
        let mut search = Search::new(3);
        assert!(search.connected(&grid("3\n...\n...\n...\n")));
    }

    #[test]
    fn trivial_grid_is_connected() {
        let mut search = Search::new(1);
        assert!(search.connected(&grid("1\n.\n")));
    }

    #[test]
    fn wall_disconnects() {
        let mut search = Search::new(3);
        assert!(!search.connected(&grid("3\n.T.\n.T.\n.T.\n")));
    }

    #[test]
    fn diagonal_gap_does_not_connect() {
        // Open cells touching only diagonally are not connected 4-ways.
        let mut search = Search::new(2);
        assert!(!search.connected(&grid("2\n.T\nT.\n")));
    }

    #[test]
    fn blocked_endpoints_disconnect() {
        let mut search = Search::new(2);
        assert!(!search.connected(&grid("2\nT.\n..\n")));
        assert!(!search.connected(&grid("2\n..\n.T\n")));
    }

    #[test]
    fn winding_corridor_connects() {
        let mut search = Search::new(5);
        assert!(search.connected(&grid("5\n....T\nTTT.T\n....T\n.TTTT\n.....\n")));
    }

    #[test]
    fn agrees_with_astar_reachability() {
        let cases = [
            "3\n...\n.T.\n...\n",
            "3\n.T.\n.T.\n.T.\n",
            "4\n....\n.TT.\n....\n....\n",
            "4\nT...\n....\n....\n....\n",
            "5\n....T\nTTT.T\n....T\n.TTTT\n.....\n",
            "1\n.\n",
        ];
        let mut search = Search::new(5);
        for text in cases {
            let g = grid(text);
            let by_bfs = search.connected(&g);
            let by_astar = search.astar(&DamageMap::build(&g)) != UNREACHABLE;
            assert_eq!(by_bfs, by_astar, "disagreement on {text:?}");
        }
    }
}
