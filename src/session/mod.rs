//! Front-end boundary: input mapping, the interactive session and the
//! read-only snapshot renderers draw from.

pub mod controller;
pub mod input;
pub mod snapshot;

pub use controller::Session;
pub use input::{cell_at_pixel, pointer_direction, Key, KeyState};
pub use snapshot::{Snapshot, Status};
