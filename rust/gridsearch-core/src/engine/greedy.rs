use tracing::debug;

use super::frontier::Frontier;
use super::path::{reconstruct_path, Predecessors};
use super::SearchEngine;
use crate::grid::Grid;
use crate::models::{PositionSet, SearchResult};

impl SearchEngine<'_> {
    /// Greedy best-first search ordered purely by Manhattan distance to goal.
    ///
    /// A neighbor is queued at most once: if it is already pending in the
    /// frontier a shorter route found later does not requeue or relink it.
    pub fn greedy_search(&self) -> SearchResult {
        let grid = self.grid;
        let start = grid.start();
        let goal = grid.goal();

        let mut frontier = Frontier::default();
        let mut came_from = Predecessors::default();
        let mut explored = PositionSet::default();
        let mut expansions: u64 = 0;

        frontier.push(Grid::manhattan_distance(start, goal), 0, start);

        while let Some(entry) = frontier.pop() {
            let current = entry.position;
            if current == goal {
                let path = reconstruct_path(&came_from, goal);
                debug!(algorithm = "greedy", expansions, explored = explored.len(), path_len = path.len(), found = true, "search finished");
                return SearchResult { path, explored, expansions };
            }
            explored.insert(current);
            expansions += 1;

            for next in grid.neighbors(current) {
                if explored.contains(&next) || frontier.contains(next) {
                    continue;
                }
                frontier.push(Grid::manhattan_distance(next, goal), 0, next);
                came_from.insert(next, current);
            }
        }

        debug!(algorithm = "greedy", expansions, explored = explored.len(), path_len = 0, found = false, "search finished");
        SearchResult::unreachable(explored, expansions)
    }
}
