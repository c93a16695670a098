//! The playing field: geometry and the graph of drawn lines.

pub mod geometry;
pub mod graph;

pub use geometry::Field;
pub use graph::{Directions, Edge, MoveGraph};
