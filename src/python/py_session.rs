//! Session binding for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, Direction, FieldConfig, Player};
use crate::rules::MoveOutcome;
use crate::session::{Key, Session};

type PyCell = (i32, i32);

fn to_py(cell: Cell) -> PyCell {
    (cell.col, cell.row)
}

fn dir_to_py(dir: Direction) -> PyCell {
    dir.offset()
}

fn outcome_name(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Rejected { .. } => "rejected",
        MoveOutcome::Continued => "continued",
        MoveOutcome::BouncedContinue { .. } => "bounced",
        MoveOutcome::GoalAgainstCurrent { .. } => "goal",
        MoveOutcome::GoalForOpponentNoMoves { .. } => "stranded",
    }
}

/// Python wrapper for `Session`.
///
/// Directions cross the boundary as `(dx, dy)` tuples and cells as
/// `(col, row)` tuples. Move methods return the outcome name:
/// `"rejected"`, `"continued"`, `"bounced"`, `"goal"` or `"stranded"`.
#[pyclass(name = "PaperSoccer")]
pub struct PyPaperSoccer {
    session: Session,
}

#[pymethods]
impl PyPaperSoccer {
    /// Create a new game.
    ///
    /// # Arguments
    /// - canvas_width, canvas_height: canvas size in pixels
    /// - cell_size: grid cell size in pixels
    /// - kickoff: optional `(col, row)` the ball starts from
    #[new]
    #[pyo3(signature = (canvas_width = 600, canvas_height = 400, cell_size = 40, kickoff = None))]
    fn new(canvas_width: u32, canvas_height: u32, cell_size: u32, kickoff: Option<PyCell>) -> PyResult<Self> {
        let mut config = FieldConfig::default()
            .with_canvas(canvas_width, canvas_height)
            .with_cell_size(cell_size);
        if let Some((col, row)) = kickoff {
            config = config.with_kickoff(Cell::new(col, row));
        }
        let session = Session::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Set the pending direction as `(dx, dy)`, or clear it with `None`.
    #[pyo3(signature = (offset = None))]
    fn select_direction(&mut self, offset: Option<PyCell>) -> PyResult<()> {
        let dir = match offset {
            None => None,
            Some((dx, dy)) => {
                let unit = dx.abs() <= 1 && dy.abs() <= 1;
                let dir = Direction::from_offset(dx, dy).filter(|_| unit);
                Some(dir.ok_or_else(|| PyValueError::new_err(format!("({}, {}) is not a unit step", dx, dy)))?)
            }
        };
        self.session.select_direction(dir);
        Ok(())
    }

    /// Hover a grid cell. Returns the selected direction, if accepted.
    fn select_at(&mut self, col: i32, row: i32) -> Option<PyCell> {
        self.session.select_at_cell(Cell::new(col, row)).map(dir_to_py)
    }

    /// Hover a canvas pixel. Returns the selected direction, if accepted.
    fn select_at_pixel(&mut self, x: f64, y: f64) -> Option<PyCell> {
        self.session.select_at_pixel(x, y).map(dir_to_py)
    }

    /// Play the pending direction.
    fn confirm_move(&mut self) -> &'static str {
        outcome_name(self.session.confirm_move())
    }

    /// Play the pending direction if there is one.
    fn click(&mut self) -> Option<&'static str> {
        self.session.click().map(outcome_name)
    }

    /// Handle a key press by DOM key code. Unknown codes are ignored.
    fn key_down(&mut self, code: &str) -> Option<&'static str> {
        let key = Key::from_code(code)?;
        self.session.key_down(key).map(outcome_name)
    }

    /// Handle a key release by DOM key code.
    fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.session.key_up(key);
        }
    }

    /// Start a new rally, or a new game when `full`.
    #[pyo3(signature = (full = true))]
    fn reset(&mut self, full: bool) {
        self.session.reset(full);
    }

    #[getter]
    fn cols(&self) -> i32 {
        self.session.state().field().cols()
    }

    #[getter]
    fn rows(&self) -> i32 {
        self.session.state().field().rows()
    }

    /// Goals defended by player 1 and player 2.
    #[getter]
    fn goals(&self) -> (PyCell, PyCell) {
        let field = self.session.state().field();
        (to_py(field.goal_of(Player::One)), to_py(field.goal_of(Player::Two)))
    }

    /// 1 or 2.
    #[getter]
    fn current_player(&self) -> u8 {
        self.session.state().current_player().number()
    }

    #[getter]
    fn position(&self) -> PyCell {
        to_py(self.session.state().position())
    }

    /// `(player1, player2)` goals.
    #[getter]
    fn score(&self) -> (u32, u32) {
        let score = self.session.state().score();
        (score[Player::One], score[Player::Two])
    }

    #[getter]
    fn bounce_count(&self) -> u32 {
        self.session.state().bounce_count()
    }

    #[getter]
    fn legal_moves(&self) -> Vec<PyCell> {
        self.session.state().legal_moves().iter().map(|&d| dir_to_py(d)).collect()
    }

    #[getter]
    fn selected(&self) -> Option<PyCell> {
        self.session.selected().map(dir_to_py)
    }

    /// Lines drawn this rally as `((col, row), (col, row), player)`.
    #[getter]
    fn history(&self) -> Vec<(PyCell, PyCell, u8)> {
        self.session
            .state()
            .graph()
            .iter()
            .map(|e| (to_py(e.from), to_py(e.to), e.player.number()))
            .collect()
    }

    #[getter]
    fn status(&self) -> String {
        self.session.status().to_string()
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "PaperSoccer(player={}, ball={}, score={})",
            state.current_player().number(),
            state.position(),
            state.score()
        )
    }
}
