use rustc_hash::FxHashMap;

use crate::models::Position;

/// Position -> position that discovered it.
pub type Predecessors = FxHashMap<Position, Position>;

/// Walk predecessor links back from `end` until a position without one (the
/// start), then return the chain start-first.
///
/// Callers only ever link a position to one that was expanded before it, so
/// the map is acyclic; a cycle is a bug and panics.
pub fn reconstruct_path(came_from: &Predecessors, end: Position) -> Vec<Position> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        assert!(path.len() <= came_from.len() + 1, "predecessor cycle through {current:?}");
        current = prev;
    }
    path.reverse();
    path
}
