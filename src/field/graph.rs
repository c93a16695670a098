//! Drawn lines and move legality.
//!
//! ## Edge
//!
//! One drawn line between two adjacent cells plus the player who drew
//! it. A line is undirected: `{a, b}` and `{b, a}` are the same line.
//!
//! ## MoveGraph
//!
//! The lines drawn this rally. Order is kept in an `im::Vector` so a
//! renderer snapshot clones in O(1); normalised line keys and touched
//! points are indexed in hash sets so legality checks are O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::Field;
use crate::core::{Cell, Direction, Player};

/// Legal directions from a point. Never more than eight.
pub type Directions = SmallVec<[Direction; 8]>;

/// A drawn line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Cell,
    pub to: Cell,
    pub player: Player,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(from: Cell, to: Cell, player: Player) -> Self {
        Self { from, to, player }
    }

    /// Orientation-independent key of the line.
    #[must_use]
    pub fn key(&self) -> (Cell, Cell) {
        line_key(self.from, self.to)
    }

    /// Check whether this edge draws the line `{a, b}`.
    #[must_use]
    pub fn connects(&self, a: Cell, b: Cell) -> bool {
        self.key() == line_key(a, b)
    }
}

fn line_key(a: Cell, b: Cell) -> (Cell, Cell) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Every line drawn in the current rally.
#[derive(Clone, Debug, Default)]
pub struct MoveGraph {
    history: Vector<Edge>,
    lines: FxHashSet<(Cell, Cell)>,
    points: FxHashSet<Cell>,
}

impl MoveGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Lines in the order they were drawn.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.history.iter()
    }

    /// The ordered history, sharing structure with the graph.
    #[must_use]
    pub fn history(&self) -> Vector<Edge> {
        self.history.clone()
    }

    /// The most recent line.
    #[must_use]
    pub fn last(&self) -> Option<&Edge> {
        self.history.last()
    }

    /// Check that the line `{from, to}` has not been drawn in either orientation.
    #[must_use]
    pub fn is_edge_free(&self, from: Cell, to: Cell) -> bool {
        !self.lines.contains(&line_key(from, to))
    }

    /// Check whether `cell` is the endpoint of any drawn line.
    #[must_use]
    pub fn has_point(&self, cell: Cell) -> bool {
        self.points.contains(&cell)
    }

    /// Directions from `pos` that stay on `field` and follow an undrawn line.
    ///
    /// Goals are ordinary in-field cells here. Off-field rebounds are
    /// never listed; they are resolved when a move is attempted.
    #[must_use]
    pub fn legal_directions(&self, field: &Field, pos: Cell) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                let dest = pos + dir;
                field.contains(dest) && self.is_edge_free(pos, dest)
            })
            .collect()
    }

    /// Record a line.
    ///
    /// Returns `false` and leaves the graph untouched if the line was
    /// already drawn.
    pub fn push(&mut self, edge: Edge) -> bool {
        if !self.lines.insert(edge.key()) {
            return false;
        }
        self.points.insert(edge.from);
        self.points.insert(edge.to);
        self.history.push_back(edge);
        true
    }

    /// Forget every line.
    pub fn clear(&mut self) {
        self.history.clear();
        self.lines.clear();
        self.points.clear();
    }
}
