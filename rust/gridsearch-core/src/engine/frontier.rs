use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::models::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub priority: u32,
    // Secondary key compared before insertion order (A* uses h).
    pub tie: u32,
    pub seq: u64,
    pub position: Position,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        (other.priority, other.tie, other.seq, other.position)
            .cmp(&(self.priority, self.tie, self.seq, self.position))
    }
}

/// Min-priority queue of positions paired with a presence count, so
/// membership checks do not scan the heap.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pending: FxHashMap<Position, u32>,
    seq: u64,
}

impl Frontier {
    pub fn push(&mut self, priority: u32, tie: u32, position: Position) {
        self.seq += 1;
        self.heap.push(FrontierEntry { priority, tie, seq: self.seq, position });
        *self.pending.entry(position).or_insert(0) += 1;
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.heap.pop()?;
        if let Some(count) = self.pending.get_mut(&entry.position) {
            *count -= 1;
            if *count == 0 {
                self.pending.remove(&entry.position);
            }
        }
        Some(entry)
    }

    /// True while at least one entry for `position` is queued.
    pub fn contains(&self, position: Position) -> bool {
        self.pending.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_then_tie_then_fifo() {
        let mut f = Frontier::default();
        f.push(5, 0, Position::new(0, 0));
        f.push(3, 2, Position::new(1, 0));
        f.push(3, 1, Position::new(2, 0));
        f.push(3, 1, Position::new(3, 0));
        let order: Vec<Position> = std::iter::from_fn(|| f.pop()).map(|e| e.position).collect();
        assert_eq!(order, vec![Position::new(2, 0), Position::new(3, 0), Position::new(1, 0), Position::new(0, 0)]);
        assert!(f.is_empty());
    }

    #[test]
    fn membership_tracks_duplicates() {
        let mut f = Frontier::default();
        let p = Position::new(1, 1);
        f.push(4, 0, p);
        f.push(2, 0, p);
        assert_eq!(f.len(), 2);
        assert!(f.contains(p));
        f.pop();
        assert!(f.contains(p));
        f.pop();
        assert!(!f.contains(p));
        assert!(f.pop().is_none());
    }
}
