//! Turn and score state machine.
//!
//! `GameState` owns everything that changes during a session: whose turn
//! it is, where the ball is, the lines drawn this rally, bounce tracking
//! and the score. The only ways to change it are [`GameState::attempt_move`]
//! and [`GameState::reset`].
//!
//! ## Move resolution
//!
//! 1. A step into a goal scores for the player defending the *other* goal
//!    and starts a new rally.
//! 2. A step along an already drawn line is rejected.
//! 3. A second consecutive border bounce is rejected.
//! 4. Otherwise the line is drawn. A bounce keeps the turn; if no step
//!    from the new point would be accepted, the mover is stranded and the
//!    opponent scores. A plain step passes the turn.
//!
//! Neither goal path swaps `current_player`: whoever moved last also
//! kicks off the next rally.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::bounce::{resolve_bounce, BounceKind, BounceResolution};
use crate::core::{Cell, ConfigError, Direction, FieldConfig, Player, Score};
use crate::field::{Directions, Edge, Field, MoveGraph};

/// Resting states between moves.
///
/// A goal is not a resting state: it resets the rally inside the move
/// that scored and leaves the game in `PlayerToMove`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A fresh turn.
    PlayerToMove,
    /// The current player bounced and moves again.
    BounceExtraMove,
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// No direction was selected.
    NoSelection,
    /// The line was already drawn this rally.
    EdgeTaken,
    /// The previous bounce this turn was also off the border.
    ConsecutiveBorderBounce,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            RejectReason::NoSelection => "no direction selected",
            RejectReason::EdgeTaken => "that line is already drawn",
            RejectReason::ConsecutiveBorderBounce => "cannot bounce off the border twice in a row",
        };
        f.write_str(msg)
    }
}

/// Result of one move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected { reason: RejectReason },
    /// The line was drawn and the turn passed.
    Continued,
    /// The line was drawn and the same player moves again.
    BouncedContinue { kind: BounceKind },
    /// The ball entered a goal; `scorer` defends the other one.
    GoalAgainstCurrent { scorer: Player },
    /// The mover bounced into a dead end; their opponent scores.
    GoalForOpponentNoMoves { scorer: Player },
}

impl MoveOutcome {
    /// Check whether the move was refused.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { .. })
    }

    /// The player credited with a goal, if this move ended the rally.
    #[must_use]
    pub fn scorer(&self) -> Option<Player> {
        match self {
            MoveOutcome::GoalAgainstCurrent { scorer } | MoveOutcome::GoalForOpponentNoMoves { scorer } => {
                Some(*scorer)
            }
            MoveOutcome::Rejected { .. } | MoveOutcome::Continued | MoveOutcome::BouncedContinue { .. } => None,
        }
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    field: Field,
    current_player: Player,
    position: Cell,
    graph: MoveGraph,
    bounce_count: u32,
    last_bounce: Option<BounceKind>,
    score: Score,
    legal_moves: Directions,
    phase: Phase,
    last_outcome: Option<MoveOutcome>,
    last_rally: Vector<Edge>,
}

impl GameState {
    /// Start a session on the field described by `config`.
    pub fn new(config: &FieldConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_field(Field::new(config)?))
    }

    /// Start a session on an already validated field.
    #[must_use]
    pub fn with_field(field: Field) -> Self {
        let mut state = Self {
            field,
            current_player: Player::One,
            position: field.kickoff(),
            graph: MoveGraph::new(),
            bounce_count: 0,
            last_bounce: None,
            score: Score::new(),
            legal_moves: Directions::new(),
            phase: Phase::PlayerToMove,
            last_outcome: None,
            last_rally: Vector::new(),
        };
        state.reset(true);
        state
    }

    // === Read access ===

    /// The field geometry.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Whose move it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Where the ball is.
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Lines drawn this rally.
    #[must_use]
    pub fn graph(&self) -> &MoveGraph {
        &self.graph
    }

    /// Bounces taken by the current player this turn.
    #[must_use]
    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    /// Kind of the most recent bounce this turn.
    #[must_use]
    pub fn last_bounce(&self) -> Option<BounceKind> {
        self.last_bounce
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Directions playable from the ball's position.
    #[must_use]
    pub fn legal_moves(&self) -> &[Direction] {
        &self.legal_moves
    }

    /// Check whether `dir` is among the legal moves.
    #[must_use]
    pub fn is_legal(&self, dir: Direction) -> bool {
        self.legal_moves.contains(&dir)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the latest move, cleared by resets.
    #[must_use]
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Lines of the last rally that ended in a goal, including the final one.
    #[must_use]
    pub fn last_rally(&self) -> &Vector<Edge> {
        &self.last_rally
    }

    // === Mutation ===

    /// Try to move the ball one step in `dir` for the current player.
    pub fn attempt_move(&mut self, dir: Direction) -> MoveOutcome {
        let outcome = self.resolve_move(dir);
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Start a new rally.
    ///
    /// A partial reset clears the ball, the lines and bounce tracking but
    /// keeps the score and the player to move. A full reset also zeroes
    /// the score and gives the move to player one.
    pub fn reset(&mut self, full: bool) {
        self.position = self.field.kickoff();
        self.graph.clear();
        self.bounce_count = 0;
        self.last_bounce = None;
        self.phase = Phase::PlayerToMove;
        self.last_outcome = None;
        if full {
            self.score.clear();
            self.current_player = Player::One;
            self.last_rally = Vector::new();
        }
        self.refresh_legal_moves();
        info!(full, player = %self.current_player, score = %self.score, "new rally");
    }

    fn resolve_move(&mut self, dir: Direction) -> MoveOutcome {
        let mover = self.current_player;
        let from = self.position;
        let dest = from + dir;

        if let Some(owner) = self.field.goal_owner(dest) {
            self.graph.push(Edge::new(from, dest, mover));
            let scorer = owner.opponent();
            info!(%mover, %scorer, goal = %dest, "goal");
            self.finish_rally(scorer);
            return MoveOutcome::GoalAgainstCurrent { scorer };
        }

        if !self.graph.is_edge_free(from, dest) {
            trace!(%mover, %from, %dest, "line already drawn");
            return MoveOutcome::Rejected {
                reason: RejectReason::EdgeTaken,
            };
        }

        let bounce = match resolve_bounce(&self.field, &self.graph, from, dir, self.last_bounce) {
            BounceResolution::Forbidden => {
                trace!(%mover, %from, %dest, "second border bounce refused");
                return MoveOutcome::Rejected {
                    reason: RejectReason::ConsecutiveBorderBounce,
                };
            }
            resolution => resolution.kind(),
        };

        self.graph.push(Edge::new(from, dest, mover));
        // Off-field rebounds leave the ball where it was.
        if self.field.contains(dest) {
            self.position = dest;
        }

        match bounce {
            Some(kind) => {
                self.bounce_count += 1;
                self.last_bounce = Some(kind);
                self.refresh_legal_moves();
                debug!(%mover, ?kind, count = self.bounce_count, at = %self.position, "bounce");

                if !self.can_move() {
                    let scorer = mover.opponent();
                    info!(%mover, %scorer, at = %self.position, "no moves left");
                    self.finish_rally(scorer);
                    return MoveOutcome::GoalForOpponentNoMoves { scorer };
                }

                self.phase = Phase::BounceExtraMove;
                MoveOutcome::BouncedContinue { kind }
            }
            None => {
                self.current_player = mover.opponent();
                self.bounce_count = 0;
                self.last_bounce = None;
                self.phase = Phase::PlayerToMove;
                self.refresh_legal_moves();
                debug!(next = %self.current_player, at = %self.position, "turn passed");
                MoveOutcome::Continued
            }
        }
    }

    fn finish_rally(&mut self, scorer: Player) {
        self.score.credit(scorer);
        self.last_rally = self.graph.history();
        self.reset(false);
    }

    /// Check whether any step from the ball would be accepted.
    ///
    /// Stricter than a non-empty `legal_moves`: after a border bounce a
    /// free line onto the border ring is still refused.
    fn can_move(&self) -> bool {
        let from = self.position;
        Direction::ALL.into_iter().any(|dir| {
            let dest = from + dir;
            self.field.is_goal(dest)
                || (self.graph.is_edge_free(from, dest)
                    && resolve_bounce(&self.field, &self.graph, from, dir, self.last_bounce)
                        != BounceResolution::Forbidden)
        })
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.graph.legal_directions(&self.field, self.position);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_field(Field::default())
    }
}
