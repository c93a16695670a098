//! # paper-soccer
//!
//! Rules engine for two-player paper soccer ("gra w kry"), played on a
//! grid of points drawn on a canvas.
//!
//! ## Rules
//!
//! - The ball starts at the kick-off point and moves one step at a time
//!   in one of 8 directions, drawing a line. A line can be drawn once.
//! - Landing on a point some line already touches, on the border ring, or
//!   rebounding off the band is a *bounce*: the mover steps again.
//!   Two border bounces in a row are not allowed.
//! - Entering a goal scores for the player defending the other goal.
//!   Bouncing into a point with no playable step left scores for the opponent.
//!
//! ## Modules
//!
//! - `core`: cells, directions, players, score, field configuration
//! - `field`: field geometry and the graph of drawn lines
//! - `rules`: bounce resolution and the turn/score state machine
//! - `session`: input mapping, interactive session, render snapshots
//! - `python` (feature `python`): PyO3 bindings for Python front-ends

pub mod core;
pub mod field;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

/// Crate version, shown by front-ends.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
pub use crate::core::{Cell, ConfigError, Direction, FieldConfig, Player, Score};

pub use crate::field::{Edge, Field, MoveGraph};

pub use crate::rules::{resolve_bounce, BounceKind, BounceResolution, GameState, MoveOutcome, Phase, RejectReason};

pub use crate::session::{Key, KeyState, Session, Snapshot, Status};
