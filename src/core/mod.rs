//! Core value types: cells, directions, players, score, configuration.
//!
//! Everything here is a small `Copy`/serde value with no game rules
//! attached. The rules live in `field` and `rules`.

pub mod cell;
pub mod config;
pub mod error;
pub mod player;

pub use cell::{Cell, Direction};
pub use config::FieldConfig;
pub use error::{ConfigError, MIN_FIELD_SIZE};
pub use player::{Player, Score};
