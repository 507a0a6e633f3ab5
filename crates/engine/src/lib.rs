//! tile-engine - 2048 rules: rotation, row collapse, moves, spawns and status.
//!
//! Every direction is reduced to "collapse left" on a rotated grid, so only
//! [`collapse_left`] and [`rotate`] carry merge and orientation logic.

pub mod collapse;
pub mod config;
pub mod movement;
pub mod spawn;
pub mod status;
pub mod transform;

pub use collapse::{collapse_left, RowCollapse};
pub use config::{ConfigError, RuleConfig, WIN_VALUE};
pub use movement::{can_move, legal_moves, move_grid, MoveOutcome};
pub use spawn::{
    create_initial_grid, spawn_tile, spawn_tile_thread, spawn_tile_with, FOUR_PROBABILITY,
};
pub use status::{evaluate_status, has_adjacent_pair};
pub use transform::{forward_rotation, revert_rotation, rotate, rotate_degrees};

pub use tile_core::{Cell, CoreError, Direction, GameState, Grid, Rotation, Status};
