//! Grid coordinates and the eight compass directions.
//!
//! ## Cell
//!
//! A point on the playing grid. Coordinates are signed so that a rebound
//! target just beyond the band (e.g. `(15, 4)` on a 15-column field) is
//! still representable.
//!
//! ## Direction
//!
//! Closed set of the eight unit steps. Rows grow downward, matching the
//! canvas the field is drawn on.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A grid point `(col, row)`, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Offset from `self` to `other` as `(dx, dy)`.
    #[must_use]
    pub const fn offset_to(self, other: Cell) -> (i32, i32) {
        (other.col - self.col, other.row - self.row)
    }

    /// Check whether `other` is one king-step away.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        let (dx, dy) = self.offset_to(other);
        self != other && dx.abs() <= 1 && dy.abs() <= 1
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(self.col + dx, self.row + dy)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One of the eight unit steps a ball can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions, in the order legal moves are reported.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The `(dx, dy)` step of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::DownLeft => (-1, 1),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Match an offset against the eight steps after normalising it to its sign.
    ///
    /// Returns `None` for `(0, 0)`.
    ///
    /// ```
    /// use paper_soccer::core::Direction;
    ///
    /// assert_eq!(Direction::from_offset(1, -1), Some(Direction::UpRight));
    /// assert_eq!(Direction::from_offset(3, 0), Some(Direction::Right));
    /// assert_eq!(Direction::from_offset(0, 0), None);
    /// ```
    #[must_use]
    pub fn from_offset(dx: i32, dy: i32) -> Option<Direction> {
        let step = (dx.signum(), dy.signum());
        Direction::ALL.into_iter().find(|d| d.offset() == step)
    }

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}
