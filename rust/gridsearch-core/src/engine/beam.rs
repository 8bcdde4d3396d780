//! Width-bounded best-first search.
//!
//! Each round expands the whole current beam, gathers the unexplored
//! neighbors as candidates, and keeps only the `beam_width` candidates
//! closest to the goal. Candidates are ranked by Manhattan distance plus a
//! jitter drawn from `[0, JITTER)` so equal-distance cells are tried in a
//! varying order.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::path::{reconstruct_path, Predecessors};
use super::SearchEngine;
use crate::grid::Grid;
use crate::models::{Position, PositionSet, SearchResult};

/// Ceiling for stagnation-driven widening. A wider beam is pulled back to it.
pub const MAX_BEAM_WIDTH: usize = 20;
const JITTER: f64 = 0.1;

#[derive(Clone, Copy, Debug)]
struct BeamEntry {
    priority: f64,
    steps: u32,
    position: Position,
}

fn by_priority(a: &BeamEntry, b: &BeamEntry) -> Ordering {
    a.priority
        .total_cmp(&b.priority)
        .then(a.steps.cmp(&b.steps))
        .then(a.position.cmp(&b.position))
}

/// Width to start with given the grid's obstacle density.
pub fn adaptive_beam_width(beam_width: usize, density: f64) -> usize {
    if density > 0.4 {
        (beam_width * 2).max(10)
    } else if density > 0.3 {
        (beam_width * 3 / 2).max(8)
    } else {
        beam_width
    }
}

/// Width after a stagnation escape: two more, clamped to [`MAX_BEAM_WIDTH`].
pub fn widen_stalled(beam_width: usize) -> usize {
    (beam_width + 2).min(MAX_BEAM_WIDTH)
}

impl SearchEngine<'_> {
    /// Beam search with an entropy-seeded tie-break generator.
    pub fn beam_search(&self, beam_width: usize, adaptive: bool) -> SearchResult {
        let mut rng = StdRng::from_entropy();
        self.beam_search_with_rng(beam_width, adaptive, &mut rng)
    }

    /// Beam search drawing tie-break jitter from `rng`.
    ///
    /// When the goal is never reached the path leads to the expanded node
    /// closest to the goal instead, or is empty if that node is the start.
    pub fn beam_search_with_rng<R>(&self, beam_width: usize, adaptive: bool, rng: &mut R) -> SearchResult
    where
        R: Rng + ?Sized,
    {
        debug_assert!(beam_width > 0, "beam width must be positive");
        let grid = self.grid;
        let start = grid.start();
        let goal = grid.goal();

        let mut beam_width = beam_width.max(1);
        if adaptive {
            let density = grid.obstacle_density();
            beam_width = adaptive_beam_width(beam_width, density);
            debug!(density, beam_width, "adaptive beam width");
        }

        let mut frontier = vec![BeamEntry {
            priority: f64::from(Grid::manhattan_distance(start, goal)),
            steps: 0,
            position: start,
        }];
        let mut came_from = Predecessors::default();
        let mut explored = PositionSet::default();
        let mut expansions: u64 = 0;
        let mut best: Option<(u32, Position)> = None;
        let mut stagnation: usize = 0;

        while !frontier.is_empty() {
            let in_beam: PositionSet = frontier.iter().map(|e| e.position).collect();
            let mut queued = PositionSet::default();
            let mut candidates: Vec<BeamEntry> = Vec::new();

            for entry in &frontier {
                let current = entry.position;
                if current == goal {
                    let path = reconstruct_path(&came_from, goal);
                    debug!(algorithm = "beam", beam_width, expansions, explored = explored.len(), path_len = path.len(), found = true, "search finished");
                    return SearchResult { path, explored, expansions };
                }
                explored.insert(current);
                expansions += 1;

                let distance = Grid::manhattan_distance(current, goal);
                if best.map_or(true, |(d, _)| distance < d) {
                    best = Some((distance, current));
                    stagnation = 0;
                } else {
                    stagnation += 1;
                }

                for next in grid.neighbors(current) {
                    // Cells in this round's beam are expanded this round.
                    if explored.contains(&next) || in_beam.contains(&next) || !queued.insert(next) {
                        continue;
                    }
                    let priority = f64::from(Grid::manhattan_distance(next, goal)) + rng.gen_range(0.0..JITTER);
                    candidates.push(BeamEntry { priority, steps: entry.steps + 1, position: next });
                    came_from.insert(next, current);
                }
            }

            if stagnation > beam_width * 2 {
                let widened = widen_stalled(beam_width);
                trace!(from = beam_width, to = widened, stagnation, "widening stalled beam");
                beam_width = widened;
                stagnation = 0;
            }

            candidates.sort_by(by_priority);
            candidates.truncate(beam_width);
            frontier = candidates;

            if stagnation > beam_width * 4 {
                debug!(stagnation, beam_width, "beam search stalled");
                break;
            }
        }

        let path = match best {
            Some((_, node)) if node != start => reconstruct_path(&came_from, node),
            _ => Vec::new(),
        };
        debug!(algorithm = "beam", beam_width, expansions, explored = explored.len(), path_len = path.len(), found = false, "search finished");
        SearchResult { path, explored, expansions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn adaptive_width_scales_with_density() {
        assert_eq!(adaptive_beam_width(5, 0.45), 10);
        assert_eq!(adaptive_beam_width(7, 0.45), 14);
        assert_eq!(adaptive_beam_width(5, 0.35), 8);
        assert_eq!(adaptive_beam_width(10, 0.4), 15);
        assert_eq!(adaptive_beam_width(5, 0.3), 5);
        assert_eq!(adaptive_beam_width(5, 0.0), 5);
    }

    #[test]
    fn stalled_width_grows_by_two_up_to_cap() {
        assert_eq!(widen_stalled(1), 3);
        assert_eq!(widen_stalled(5), 7);
        assert_eq!(widen_stalled(19), MAX_BEAM_WIDTH);
        assert_eq!(widen_stalled(20), MAX_BEAM_WIDTH);
        assert_eq!(widen_stalled(24), MAX_BEAM_WIDTH);
        assert_eq!(widen_stalled(adaptive_beam_width(15, 0.45)), MAX_BEAM_WIDTH);
    }

    #[test]
    fn single_cell_beam_escapes_dead_end_after_widening() {
        // Greedy ranking walks the top rows into the right-hand pocket. A
        // one-cell beam empties there; after two widenings it keeps the
        // left-hand column that leads down to the goal.
        let grid = Grid::from_rows(&["..#...", "......", "....##", ".#####", ".##...", "#....."]).unwrap();
        let engine = SearchEngine::new(&grid);
        for seed in 0..16 {
            let res = engine.beam_search_with_rng(1, false, &mut seeded(seed));
            assert!(res.reaches(grid.goal()), "seed {seed}");
            assert_eq!(res.expansions, 23);
            assert!(res.path.contains(&p(4, 0)));
        }
    }

    #[test]
    fn open_grid_reaches_goal() {
        let grid = Grid::new(6, 6).unwrap();
        let engine = SearchEngine::new(&grid);
        for seed in 0..8 {
            let res = engine.beam_search_with_rng(3, false, &mut seeded(seed));
            assert!(res.reaches(grid.goal()));
            assert_eq!(res.path.len(), 6);
            assert_eq!(res.expansions as usize, res.explored.len());
        }
    }

    #[test]
    fn same_seed_same_result() {
        let grid = Grid::from_rows(&["......", ".####.", "......", "#.##.#", "......"]).unwrap();
        let engine = SearchEngine::new(&grid);
        let a = engine.beam_search_with_rng(2, true, &mut seeded(99));
        let b = engine.beam_search_with_rng(2, true, &mut seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn single_cell_grid_returns_start() {
        let grid = Grid::new(1, 1).unwrap();
        let res = SearchEngine::new(&grid).beam_search_with_rng(5, true, &mut seeded(0));
        assert_eq!(res.path, vec![p(0, 0)]);
        assert_eq!(res.expansions, 0);
        assert!(res.explored.is_empty());
    }

    #[test]
    fn walled_goal_returns_path_to_closest_cell() {
        let grid = Grid::from_rows(&[".....", ".....", "#####", ".....", "....."]).unwrap();
        let engine = SearchEngine::new(&grid);
        for seed in 0..8 {
            let res = engine.beam_search_with_rng(5, false, &mut seeded(seed));
            assert!(res.expansions > 0);
            assert_eq!(res.path.first(), Some(&grid.start()));
            let last = *res.path.last().unwrap();
            let closest = res.explored.iter().map(|&q| Grid::manhattan_distance(q, grid.goal())).min().unwrap();
            assert_eq!(Grid::manhattan_distance(last, grid.goal()), closest);
            assert!(res.path.iter().all(|q| q.row <= 1));
        }
    }

    #[test]
    fn isolated_start_returns_empty_path() {
        let grid = Grid::from_rows(&[".#.", "##.", "..."]).unwrap();
        let res = SearchEngine::new(&grid).beam_search_with_rng(4, false, &mut seeded(5));
        assert!(res.path.is_empty());
        assert_eq!(res.expansions, 1);
        assert_eq!(res.explored, [grid.start()].into_iter().collect());
    }

    #[test]
    fn narrow_beam_still_explores_each_cell_once() {
        let grid = Grid::from_rows(&[
            "........",
            ".######.",
            ".#....#.",
            ".#.##.#.",
            ".#.#..#.",
            "...#.##.",
            "####....",
        ])
        .unwrap();
        let engine = SearchEngine::new(&grid);
        for seed in 0..16 {
            let res = engine.beam_search_with_rng(1, false, &mut seeded(seed));
            assert_eq!(res.expansions as usize, res.explored.len());
            assert!(res.explored.iter().all(|&q| grid.is_free(q)));
            for w in res.path.windows(2) {
                assert!(w[0].is_adjacent(w[1]));
                assert!(grid.is_free(w[1]));
            }
        }
    }
}
