//! Whole-grid moves: rotate, collapse every row left, rotate back.

use serde::{Deserialize, Serialize};
use tile_core::{CoreError, Direction, Grid};

use crate::collapse::collapse_left;
use crate::transform::{forward_rotation, revert_rotation, rotate};

/// Grid after a move, before any spawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True iff some cell differs from the input at the same position.
    pub moved: bool,
    /// Sum of merged tile values produced by this move.
    pub score_gained: u64,
}

/// Apply one move to `grid`.
///
/// Fails on a grid that is not rectangular or has no cells, and on a merge
/// of two `2^31` tiles, which no `u32` cell can hold.
pub fn move_grid(grid: &Grid, direction: Direction) -> Result<MoveOutcome, CoreError> {
    grid.shape()?;

    let rotated = rotate(grid, forward_rotation(direction));

    let mut rows = Vec::with_capacity(rotated.height());
    let mut moved = false;
    let mut score_gained = 0u64;
    for row in rotated.rows() {
        let collapsed = collapse_left(row)?;
        moved |= collapsed.moved;
        score_gained += collapsed.score;
        rows.push(collapsed.cells);
    }

    Ok(MoveOutcome {
        grid: rotate(&Grid::from_rows(rows), revert_rotation(direction)),
        moved,
        score_gained,
    })
}

/// Whether a move in `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    move_grid(grid, direction).is_ok_and(|outcome| outcome.moved)
}

/// Directions that change the grid, in [`Direction::ALL`] order.
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}
