//! Read-only view of a session for renderers.
//!
//! A `Snapshot` is detached from the session: holding one never blocks a
//! move. The line history is an `im::Vector`, so taking a snapshot every
//! frame does not copy the lines.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction, Player, Score};
use crate::field::{Directions, Edge};
use crate::rules::{BounceKind, GameState, MoveOutcome, Phase, RejectReason};

/// Message shown to the players, keyed to what last happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A full or partial reset just happened.
    NewGame,
    /// The turn passed to `player`.
    PlayerToMove { player: Player },
    /// `player` bounced and moves again.
    Bounce { player: Player, count: u32 },
    /// The ball went into a goal.
    Goal { scorer: Player },
    /// The mover was left without a legal step.
    Stranded { scorer: Player },
    /// The last attempt was refused.
    Rejected { reason: RejectReason },
}

impl Status {
    /// Status after `outcome` was applied to `state`.
    #[must_use]
    pub fn after(outcome: MoveOutcome, state: &GameState) -> Self {
        match outcome {
            MoveOutcome::Rejected { reason } => Status::Rejected { reason },
            MoveOutcome::Continued => Status::PlayerToMove {
                player: state.current_player(),
            },
            MoveOutcome::BouncedContinue { .. } => Status::Bounce {
                player: state.current_player(),
                count: state.bounce_count(),
            },
            MoveOutcome::GoalAgainstCurrent { scorer } => Status::Goal { scorer },
            MoveOutcome::GoalForOpponentNoMoves { scorer } => Status::Stranded { scorer },
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NewGame => write!(f, "New game"),
            Status::PlayerToMove { player } => write!(f, "{} to move", player),
            Status::Bounce { player, count } => {
                write!(f, "Bounce! {} takes an extra move (bounces: {})", player, count)
            }
            Status::Goal { scorer } => write!(f, "Goal! Point for {}", scorer),
            Status::Stranded { scorer } => write!(f, "No moves left - point for {}", scorer),
            Status::Rejected { reason } => write!(f, "Move not allowed: {}", reason),
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cols: i32,
    pub rows: i32,
    /// Goals defended by player one and player two.
    pub goals: [Cell; 2],
    pub current_player: Player,
    pub position: Cell,
    pub history: Vector<Edge>,
    pub legal_moves: Directions,
    pub selected: Option<Direction>,
    pub bounce_count: u32,
    pub last_bounce: Option<BounceKind>,
    pub score: Score,
    pub phase: Phase,
    pub status: Status,
}

impl Snapshot {
    /// Capture `state` together with the session's selection and status.
    #[must_use]
    pub fn capture(state: &GameState, selected: Option<Direction>, status: Status) -> Self {
        let field = state.field();
        Self {
            cols: field.cols(),
            rows: field.rows(),
            goals: [field.goal_of(Player::One), field.goal_of(Player::Two)],
            current_player: state.current_player(),
            position: state.position(),
            history: state.graph().history(),
            legal_moves: state.legal_moves().iter().copied().collect(),
            selected,
            bounce_count: state.bounce_count(),
            last_bounce: state.last_bounce(),
            score: state.score(),
            phase: state.phase(),
            status,
        }
    }

    /// Cell the selected direction points at, for highlighting.
    #[must_use]
    pub fn selected_target(&self) -> Option<Cell> {
        self.selected.map(|dir| self.position + dir)
    }
}
