//! Field configuration.
//!
//! The grid is derived from a canvas size and a fixed cell size, the way
//! the front-end lays the field out: a 600×400 canvas with 40px cells gives
//! the default 15×10 field.
//!
//! Configs are plain serde structs so front-ends can load them from JSON
//! or TOML. Call [`FieldConfig::validate`] (or build a `Field`) before use.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::{ConfigError, MIN_FIELD_SIZE};

/// Canvas and grid settings for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,

    /// Canvas height in pixels.
    pub canvas_height: u32,

    /// Side of one grid cell in pixels.
    pub cell_size: u32,

    /// Where the ball is placed after every reset.
    /// `None` means the centre of the field.
    pub kickoff: Option<Cell>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            cell_size: 40,
            kickoff: None,
        }
    }
}

impl FieldConfig {
    /// Config for a field of exactly `cols` × `rows` cells at the default cell size.
    ///
    /// Grids whose canvas would not fit in `u32` pixels get 1px cells, so
    /// the cell counts are always kept exactly.
    #[must_use]
    pub fn with_grid(cols: u32, rows: u32) -> Self {
        let default = Self::default().cell_size;
        let cell_size = match (cols.checked_mul(default), rows.checked_mul(default)) {
            (Some(_), Some(_)) => default,
            _ => 1,
        };
        Self {
            canvas_width: cols.saturating_mul(cell_size),
            canvas_height: rows.saturating_mul(cell_size),
            cell_size,
            kickoff: None,
        }
    }

    /// Set a custom canvas size.
    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set a custom cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Place the ball somewhere other than the centre after resets.
    #[must_use]
    pub fn with_kickoff(mut self, cell: Cell) -> Self {
        self.kickoff = Some(cell);
        self
    }

    /// Number of grid columns. Zero if the cell size is zero, saturating
    /// at `i32::MAX` (which [`FieldConfig::validate`] rejects).
    #[must_use]
    pub fn cols(&self) -> i32 {
        i32::try_from(self.grid_cols()).unwrap_or(i32::MAX)
    }

    /// Number of grid rows. Zero if the cell size is zero, saturating
    /// at `i32::MAX` (which [`FieldConfig::validate`] rejects).
    #[must_use]
    pub fn rows(&self) -> i32 {
        i32::try_from(self.grid_rows()).unwrap_or(i32::MAX)
    }

    fn grid_cols(&self) -> u32 {
        self.canvas_width.checked_div(self.cell_size).unwrap_or(0)
    }

    fn grid_rows(&self) -> u32 {
        self.canvas_height.checked_div(self.cell_size).unwrap_or(0)
    }

    /// The centre point, `(cols / 2, rows / 2)`.
    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(self.cols() / 2, self.rows() / 2)
    }

    /// The configured kick-off point, or the centre.
    #[must_use]
    pub fn kickoff_cell(&self) -> Cell {
        self.kickoff.unwrap_or_else(|| self.center())
    }

    /// Check the config describes a playable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let (grid_cols, grid_rows) = (self.grid_cols(), self.grid_rows());
        let (Ok(cols), Ok(rows)) = (i32::try_from(grid_cols), i32::try_from(grid_rows)) else {
            return Err(ConfigError::FieldTooLarge {
                cols: grid_cols,
                rows: grid_rows,
            });
        };
        if cols < MIN_FIELD_SIZE || rows < MIN_FIELD_SIZE {
            return Err(ConfigError::FieldTooSmall { cols, rows });
        }

        let cell = self.kickoff_cell();
        if !(0..cols).contains(&cell.col) || !(0..rows).contains(&cell.row) {
            return Err(ConfigError::KickoffOutOfBounds { cell, cols, rows });
        }
        if cell.row == rows / 2 && (cell.col == 0 || cell.col == cols - 1) {
            return Err(ConfigError::KickoffOnGoal { cell });
        }

        Ok(())
    }
}
