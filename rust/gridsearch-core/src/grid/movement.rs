//! Eight-connected movement offsets.
//! Every move costs one step regardless of direction.

use crate::models::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    pub name: &'static str,
    pub d_row: i32,
    pub d_col: i32,
}

pub const EAST: Movement = Movement { name: "east", d_row: 0, d_col: 1 };
pub const SOUTH: Movement = Movement { name: "south", d_row: 1, d_col: 0 };
pub const WEST: Movement = Movement { name: "west", d_row: 0, d_col: -1 };
pub const NORTH: Movement = Movement { name: "north", d_row: -1, d_col: 0 };
pub const SOUTHEAST: Movement = Movement { name: "southeast", d_row: 1, d_col: 1 };
pub const NORTHWEST: Movement = Movement { name: "northwest", d_row: -1, d_col: -1 };
pub const SOUTHWEST: Movement = Movement { name: "southwest", d_row: 1, d_col: -1 };
pub const NORTHEAST: Movement = Movement { name: "northeast", d_row: -1, d_col: 1 };

// Deterministic neighbor order: cardinals first, then diagonals.
// Tie-broken searches depend on it staying fixed.
pub const MOVEMENT_ORDER: [Movement; 8] = [
    EAST, SOUTH, WEST, NORTH, SOUTHEAST, NORTHWEST, SOUTHWEST, NORTHEAST,
];

impl Movement {
    #[inline]
    pub fn apply(&self, pos: Position) -> Position {
        pos.offset(self.d_row, self.d_col)
    }

    pub fn is_diagonal(&self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_is_cardinals_then_diagonals() {
        assert!(MOVEMENT_ORDER[..4].iter().all(|m| !m.is_diagonal()));
        assert!(MOVEMENT_ORDER[4..].iter().all(|m| m.is_diagonal()));
        let offsets: HashSet<(i32, i32)> = MOVEMENT_ORDER.iter().map(|m| (m.d_row, m.d_col)).collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
    }

    #[test]
    fn apply_offsets_position() {
        assert_eq!(SOUTHWEST.apply(Position::new(3, 3)), Position::new(4, 2));
        assert_eq!(NORTH.apply(Position::new(0, 0)), Position::new(-1, 0));
    }
}
