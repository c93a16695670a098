//! The session a front-end drives.
//!
//! A `Session` wraps the `GameState` with what the front-end needs between
//! moves: the pending direction, held keys and the status message. Moves
//! only happen on `confirm_move` (or the key/click drivers that call it);
//! selecting never changes the game.

use tracing::trace;

use super::input::{cell_at_pixel, pointer_direction, Key, KeyState};
use super::snapshot::{Snapshot, Status};
use crate::core::{Cell, ConfigError, Direction, FieldConfig};
use crate::rules::{GameState, MoveOutcome, RejectReason};

/// One interactive game.
#[derive(Clone, Debug)]
pub struct Session {
    config: FieldConfig,
    state: GameState,
    selected: Option<Direction>,
    keys: KeyState,
    status: Status,
}

impl Session {
    /// Start a session on the field described by `config`.
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        let state = GameState::new(&config)?;
        Ok(Self {
            config,
            state,
            selected: None,
            keys: KeyState::new(),
            status: Status::NewGame,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Read access to the rules state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The pending direction.
    #[must_use]
    pub fn selected(&self) -> Option<Direction> {
        self.selected
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Detached view for drawing.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.selected, self.status)
    }

    // === Selection ===

    /// Set or clear the pending direction without checking it.
    pub fn select_direction(&mut self, dir: Option<Direction>) {
        self.selected = dir;
    }

    /// Select the direction towards a hovered cell.
    ///
    /// Only the ball's neighbours reachable by a legal move are accepted;
    /// anything else leaves the selection as it was.
    pub fn select_at_cell(&mut self, cell: Cell) -> Option<Direction> {
        let dir = pointer_direction(self.state.position(), cell).filter(|&d| self.state.is_legal(d))?;
        self.selected = Some(dir);
        Some(dir)
    }

    /// Select the direction towards the cell under a canvas pixel.
    pub fn select_at_pixel(&mut self, x: f64, y: f64) -> Option<Direction> {
        let cell = cell_at_pixel(x, y, self.config.cell_size)?;
        self.select_at_cell(cell)
    }

    /// Select from a combination of held arrow keys.
    ///
    /// Unlike pointer selection this is not limited to legal moves, so
    /// rebounds off the band can be chosen. The engine still validates the
    /// move on confirm. A combination that maps to nothing keeps the
    /// previous selection.
    pub fn select_from_keys(&mut self, keys: KeyState) -> Option<Direction> {
        let dir = keys.direction()?;
        self.selected = Some(dir);
        Some(dir)
    }

    // === Moves ===

    /// Play the pending direction and clear it.
    pub fn confirm_move(&mut self) -> MoveOutcome {
        let outcome = match self.selected.take() {
            Some(dir) => self.state.attempt_move(dir),
            None => MoveOutcome::Rejected {
                reason: RejectReason::NoSelection,
            },
        };
        self.status = Status::after(outcome, &self.state);
        outcome
    }

    /// Pointer click: play the hovered direction if there is one.
    pub fn click(&mut self) -> Option<MoveOutcome> {
        self.selected.is_some().then(|| self.confirm_move())
    }

    /// Start a new rally, or a new game when `full`.
    pub fn reset(&mut self, full: bool) {
        self.state.reset(full);
        self.selected = None;
        self.status = Status::NewGame;
    }

    // === Keyboard driver ===

    /// Handle a key press.
    ///
    /// While the reset key is held any press restarts the game. Confirm
    /// plays the selection if there is one; otherwise the held arrows
    /// update the selection. Returns the outcome when a move was attempted.
    pub fn key_down(&mut self, key: Key) -> Option<MoveOutcome> {
        self.keys.press(key);
        trace!(?key, keys = ?self.keys, "key down");

        if self.keys.reset {
            self.reset(true);
            return None;
        }
        if self.keys.confirm && self.selected.is_some() {
            return Some(self.confirm_move());
        }
        self.select_from_keys(self.keys);
        None
    }

    pub fn key_up(&mut self, key: Key) {
        self.keys.release(key);
    }

    /// Keys currently held.
    #[must_use]
    pub fn keys(&self) -> KeyState {
        self.keys
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = FieldConfig::default();
        Self {
            state: GameState::default(),
            config,
            selected: None,
            keys: KeyState::new(),
            status: Status::NewGame,
        }
    }
}
