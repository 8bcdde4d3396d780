#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use gridsearch_core::{Grid, Position, SearchResult};

/// Unit-weight breadth-first step count from start to goal over the grid's
/// own adjacency.
pub fn bfs_steps(grid: &Grid) -> Option<usize> {
    let mut dist: HashMap<Position, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(grid.start(), 0);
    queue.push_back(grid.start());
    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        if cur == grid.goal() {
            return Some(d);
        }
        for next in grid.neighbors(cur) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Free cells connected to the start.
pub fn reachable_cells(grid: &Grid) -> HashSet<Position> {
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(cur) = queue.pop_front() {
        for next in grid.neighbors(cur) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Path starts at start, every hop is a grid neighbor, nothing is blocked,
/// and the metrics agree.
pub fn assert_well_formed(grid: &Grid, res: &SearchResult) {
    assert_eq!(res.expansions as usize, res.explored.len(), "expansions must equal explored size");
    assert!(res.explored.iter().all(|&p| grid.is_free(p)), "explored a blocked cell");
    if let Some(first) = res.path.first() {
        assert_eq!(*first, grid.start());
    }
    for p in &res.path {
        assert!(grid.is_free(*p), "path crosses blocked cell {p:?}");
    }
    for w in res.path.windows(2) {
        assert!(
            grid.neighbors(w[0]).any(|n| n == w[1]),
            "{:?} -> {:?} is not a neighbor hop",
            w[0],
            w[1]
        );
    }
}
