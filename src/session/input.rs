//! Mapping raw input to directions.
//!
//! Pointer input: the hovered cell relative to the ball picks one of the
//! eight neighbours. Keyboard input: held arrow keys combine into a
//! direction, diagonals first. A lone opposing pair cancels out.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction};

/// Keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Play the selected direction (Space).
    Confirm,
    /// Start a new game (R).
    Reset,
}

impl Key {
    /// Look a key up by its DOM `KeyboardEvent.code`.
    ///
    /// ```
    /// use paper_soccer::session::Key;
    ///
    /// assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
    /// assert_eq!(Key::from_code("KeyR"), Some(Key::Reset));
    /// assert_eq!(Key::from_code("KeyQ"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Confirm),
            "KeyR" => Some(Key::Reset),
            _ => None,
        }
    }
}

/// Which keys are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub reset: bool,
}

impl KeyState {
    /// No keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Held-key state with the given keys down.
    #[must_use]
    pub fn with(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        *self.slot(key) = true;
    }

    pub fn release(&mut self, key: Key) {
        *self.slot(key) = false;
    }

    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Confirm => self.confirm,
            Key::Reset => self.reset,
        }
    }

    /// Direction selected by the held arrows.
    ///
    /// Any held diagonal pair wins, checked in the order up-left, up-right,
    /// down-left, down-right. Without one, an opposing pair on the only
    /// held axis (up+down or left+right) selects nothing.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match (self.up, self.down, self.left, self.right) {
            (true, _, true, _) => Some(Direction::UpLeft),
            (true, _, _, true) => Some(Direction::UpRight),
            (_, true, true, _) => Some(Direction::DownLeft),
            (_, true, _, true) => Some(Direction::DownRight),
            (true, true, _, _) | (_, _, true, true) => None,
            (true, _, _, _) => Some(Direction::Up),
            (_, true, _, _) => Some(Direction::Down),
            (_, _, true, _) => Some(Direction::Left),
            (_, _, _, true) => Some(Direction::Right),
            _ => None,
        }
    }

    fn slot(&mut self, key: Key) -> &mut bool {
        match key {
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Confirm => &mut self.confirm,
            Key::Reset => &mut self.reset,
        }
    }
}

/// Direction from `ball` towards a hovered `target` cell.
///
/// Only the eight neighbours of the ball qualify.
#[must_use]
pub fn pointer_direction(ball: Cell, target: Cell) -> Option<Direction> {
    if !ball.is_adjacent(target) {
        return None;
    }
    let (dx, dy) = ball.offset_to(target);
    Direction::from_offset(dx, dy)
}

/// Grid cell under a canvas pixel, for square cells of `cell_size` pixels.
///
/// Returns `None` when `cell_size` is zero.
#[must_use]
pub fn cell_at_pixel(x: f64, y: f64, cell_size: u32) -> Option<Cell> {
    if cell_size == 0 {
        return None;
    }
    let size = f64::from(cell_size);
    Some(Cell::new((x / size).floor() as i32, (y / size).floor() as i32))
}
