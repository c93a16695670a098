//! Game rules: bounce detection and the turn/score state machine.
//!
//! The engine never touches input devices or drawing. Front-ends go
//! through `session::Session`, which calls [`GameState::attempt_move`]
//! and [`GameState::reset`].

pub mod bounce;
pub mod engine;

pub use bounce::{resolve_bounce, BounceKind, BounceResolution};
pub use engine::{GameState, MoveOutcome, Phase, RejectReason};
