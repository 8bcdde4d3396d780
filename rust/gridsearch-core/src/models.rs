use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Grid coordinate as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self { row: self.row + d_row, col: self.col + d_col }
    }

    /// True when `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

pub type PositionSet = FxHashSet<Position>;

/// Outcome of a single search call.
///
/// `path` runs from start to goal inclusive, is empty when the goal is
/// unreachable, and for beam search may end at the closest node reached.
/// `explored` holds every position that was popped and expanded, and
/// `expansions` counts those expansions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Vec<Position>,
    pub explored: PositionSet,
    pub expansions: u64,
}

impl SearchResult {
    pub(crate) fn unreachable(explored: PositionSet, expansions: u64) -> Self {
        Self { path: Vec::new(), explored, expansions }
    }

    /// True when the path ends at `goal`.
    pub fn reaches(&self, goal: Position) -> bool {
        self.path.last() == Some(&goal)
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}
