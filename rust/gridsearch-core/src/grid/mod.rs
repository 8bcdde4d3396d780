pub mod generate;
pub mod movement;

use std::fmt;

use bitvec::prelude::*;

use crate::error::GridError;
use crate::models::Position;
use movement::MOVEMENT_ORDER;

const FREE_CHAR: char = '.';
const BLOCKED_CHAR: char = '#';

/// Rectangular occupancy grid with a fixed start at the top-left corner and
/// a fixed goal at the bottom-right corner.
///
/// The obstacle layout is frozen once construction returns; start and goal
/// are always free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    // Row-major, set bit = blocked.
    blocked: BitVec,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Obstacle-free grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            blocked: bitvec![0; width * height],
            start: Position::new(0, 0),
            goal: Position::new(height as i32 - 1, width as i32 - 1),
        })
    }

    /// Grid with the listed cells blocked. Start and goal are skipped even if
    /// listed.
    pub fn with_blocked<I>(width: usize, height: usize, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::new(width, height)?;
        for pos in blocked {
            if !grid.in_bounds(pos) {
                return Err(GridError::OutOfBounds { row: pos.row, col: pos.col, width, height });
            }
            grid.block(pos);
        }
        Ok(grid)
    }

    /// Parse a layout of `.` (free) and `#` (blocked) rows, top row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        let mut grid = Self::new(width, height)?;
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(GridError::Parse(format!("row {r} has {} cells, expected {width}", line.chars().count())));
            }
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    FREE_CHAR => {}
                    BLOCKED_CHAR => grid.block(Position::new(r as i32, c as i32)),
                    other => return Err(GridError::Parse(format!("unexpected {other:?} at row {r}, column {c}"))),
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Out-of-bounds positions count as blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => self.blocked[i],
            None => true,
        }
    }

    pub fn is_free(&self, pos: Position) -> bool {
        !self.is_blocked(pos)
    }

    /// In-bounds free cells among the eight surrounding `pos`, in
    /// [`MOVEMENT_ORDER`].
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        MOVEMENT_ORDER.iter().map(move |m| m.apply(pos)).filter(move |&p| self.is_free(p))
    }

    pub fn manhattan_distance(a: Position, b: Position) -> u32 {
        a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
    }

    pub fn euclidean_distance(a: Position, b: Position) -> f64 {
        let dr = f64::from(a.row - b.row);
        let dc = f64::from(a.col - b.col);
        dr.hypot(dc)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn obstacle_count(&self) -> usize {
        self.blocked.count_ones()
    }

    pub fn free_count(&self) -> usize {
        self.cell_count() - self.obstacle_count()
    }

    /// Fraction of all cells that are blocked.
    pub fn obstacle_density(&self) -> f64 {
        self.obstacle_count() as f64 / self.cell_count() as f64
    }

    /// Every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |r| (0..width).map(move |c| Position::new(r, c)))
    }

    pub fn is_endpoint(&self, pos: Position) -> bool {
        pos == self.start || pos == self.goal
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub(crate) fn block(&mut self, pos: Position) {
        if self.is_endpoint(pos) {
            return;
        }
        if let Some(i) = self.index(pos) {
            self.blocked.set(i, true);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocked.chunks(self.width) {
            let line: String = row.iter().map(|b| if *b { BLOCKED_CHAR } else { FREE_CHAR }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
