//! Configuration error types.
//!
//! Rule violations during play are not errors: they come back as
//! `MoveOutcome::Rejected`. Only building a field can fail.

use derive_more::{Display, Error};

use super::cell::Cell;

/// Smallest field dimension. A 3×3 field still has an interior point
/// and a goal on each side.
pub const MIN_FIELD_SIZE: i32 = 3;

/// Invalid `FieldConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Cell size of zero cannot divide the canvas.
    #[display("cell size must be positive")]
    ZeroCellSize,

    /// Canvas too small for a playable grid.
    #[display("field of {cols}x{rows} cells is smaller than the 3x3 minimum")]
    FieldTooSmall { cols: i32, rows: i32 },

    /// Grid dimensions beyond `i32` coordinates.
    #[display("field of {cols}x{rows} cells is too large")]
    FieldTooLarge { cols: u32, rows: u32 },

    /// Kick-off point outside the grid.
    #[display("kick-off cell {cell} lies outside the {cols}x{rows} field")]
    KickoffOutOfBounds { cell: Cell, cols: i32, rows: i32 },

    /// Kick-off point on top of a goal.
    #[display("kick-off cell {cell} is a goal")]
    KickoffOnGoal { cell: Cell },
}
