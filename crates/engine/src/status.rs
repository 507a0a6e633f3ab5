use tile_core::{Grid, Status};

/// Classify `grid`. The win check runs first, so a stuck board that holds
/// `win_value` is still a win.
pub fn evaluate_status(grid: &Grid, win_value: u32) -> Status {
    if grid.contains(win_value) {
        return Status::Win;
    }
    if !grid.has_empty() && !has_adjacent_pair(grid) {
        return Status::Lose;
    }
    Status::Playing
}

/// Any two horizontally or vertically adjacent tiles with equal value.
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    let rows = grid.rows();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let Some(value) = cell else { continue };
            if row.get(c + 1).copied().flatten() == Some(*value) {
                return true;
            }
            if rows.get(r + 1).and_then(|next| next.get(c)).copied().flatten() == Some(*value) {
                return true;
            }
        }
    }
    false
}
