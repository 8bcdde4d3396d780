use rustc_hash::FxHashMap;
use tracing::debug;

use super::frontier::Frontier;
use super::path::{reconstruct_path, Predecessors};
use super::SearchEngine;
use crate::grid::Grid;
use crate::models::{Position, PositionSet, SearchResult};

impl SearchEngine<'_> {
    /// A* over unit-cost steps with `f = g + manhattan(n, goal)`.
    ///
    /// Manhattan distance overestimates once diagonal steps cost 1, so the
    /// returned path is near-shortest rather than guaranteed shortest.
    pub fn astar_search(&self) -> SearchResult {
        let grid = self.grid;
        let start = grid.start();
        let goal = grid.goal();

        let mut frontier = Frontier::default();
        let mut cost_so_far: FxHashMap<Position, u32> = FxHashMap::default();
        let mut came_from = Predecessors::default();
        let mut explored = PositionSet::default();
        let mut expansions: u64 = 0;

        let h0 = Grid::manhattan_distance(start, goal);
        cost_so_far.insert(start, 0);
        frontier.push(h0, h0, start);

        while let Some(entry) = frontier.pop() {
            let current = entry.position;
            if current == goal {
                let path = reconstruct_path(&came_from, goal);
                debug!(algorithm = "astar", expansions, explored = explored.len(), path_len = path.len(), found = true, "search finished");
                return SearchResult { path, explored, expansions };
            }
            // Discard stale duplicates of an expanded position
            if !explored.insert(current) {
                continue;
            }
            expansions += 1;

            let g = cost_so_far[&current];
            for next in grid.neighbors(current) {
                let tentative_g = g + 1;
                let improves = cost_so_far.get(&next).map_or(true, |&best| tentative_g < best);
                if improves {
                    cost_so_far.insert(next, tentative_g);
                    came_from.insert(next, current);
                    let h = Grid::manhattan_distance(next, goal);
                    frontier.push(tentative_g + h, h, next);
                }
            }
        }

        debug!(algorithm = "astar", expansions, explored = explored.len(), path_len = 0, found = false, "search finished");
        SearchResult::unreachable(explored, expansions)
    }
}
