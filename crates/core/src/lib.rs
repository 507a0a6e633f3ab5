//! Tile core crate - fundamental types for the 2048 sliding-tile puzzle.

mod direction;
mod error;
mod grid;
mod rotation;
mod state;

pub use direction::Direction;
pub use error::CoreError;
pub use grid::{Cell, Grid};
pub use rotation::Rotation;
pub use state::{GameState, Status};
