//! Python bindings for the paper soccer engine.
//!
//! Lets a Python front-end (pygame, tkinter, ...) own the window and
//! drawing while the rules stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import paper_soccer as ps
//!
//! game = ps.PaperSoccer(canvas_width=600, canvas_height=400, cell_size=40)
//!
//! # Hover and click
//! game.select_at_pixel(330.0, 170.0)
//! outcome = game.click()
//!
//! # Or drive it with DOM-style key codes
//! game.key_down("ArrowRight")
//! game.key_down("Space")
//!
//! for (a, b, player) in game.history:
//!     ...
//! print(game.status)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// paper_soccer: rules engine for two-player paper soccer.
#[pymodule]
fn paper_soccer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPaperSoccer>()?;
    m.add("VERSION", crate::VERSION)?;
    Ok(())
}
