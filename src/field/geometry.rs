//! Field geometry: bounds, the border ring, goals and the kick-off point.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, ConfigError, FieldConfig, Player};

/// Validated, immutable grid geometry.
///
/// Player one defends the goal on the left edge, player two the one on
/// the right edge. Both goals sit on the middle row and are ordinary
/// in-field cells; entering one ends the rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    cols: i32,
    rows: i32,
    kickoff: Cell,
}

impl Field {
    /// Build the field described by `config`.
    pub fn new(config: &FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cols: config.cols(),
            rows: config.rows(),
            kickoff: config.kickoff_cell(),
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// `(cols / 2, rows / 2)`.
    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Where the ball starts every rally.
    #[must_use]
    pub fn kickoff(&self) -> Cell {
        self.kickoff
    }

    /// Check whether `cell` lies on the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    /// Check whether `cell` lies on the outermost ring of the grid.
    #[must_use]
    pub fn is_border(&self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.col == 0 || cell.col == self.cols - 1 || cell.row == 0 || cell.row == self.rows - 1)
    }

    /// The goal `player` defends.
    #[must_use]
    pub fn goal_of(&self, player: Player) -> Cell {
        let row = self.rows / 2;
        match player {
            Player::One => Cell::new(0, row),
            Player::Two => Cell::new(self.cols - 1, row),
        }
    }

    /// The player defending the goal at `cell`, if `cell` is a goal.
    #[must_use]
    pub fn goal_owner(&self, cell: Cell) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.goal_of(p) == cell)
    }

    /// Check whether `cell` is either goal.
    #[must_use]
    pub fn is_goal(&self, cell: Cell) -> bool {
        self.goal_owner(cell).is_some()
    }
}

impl Default for Field {
    fn default() -> Self {
        let config = FieldConfig::default();
        Self {
            cols: config.cols(),
            rows: config.rows(),
            kickoff: config.kickoff_cell(),
        }
    }
}
