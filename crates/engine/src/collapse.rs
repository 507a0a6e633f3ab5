use tile_core::{Cell, CoreError};

/// Result of sliding one row to the left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowCollapse {
    pub cells: Vec<Cell>,
    pub moved: bool,
    pub score: u64,
}

/// Slide tiles left and merge equal neighbours once each.
///
/// Single left-to-right pass holding at most one pending tile. A pending
/// tile that meets an equal value is emitted doubled and the slot is
/// cleared, so a merged tile never merges again in the same move.
///
/// Fails with [`CoreError::TileOverflow`] when a merge would not fit in a
/// cell (two `2^31` tiles).
pub fn collapse_left(row: &[Cell]) -> Result<RowCollapse, CoreError> {
    let mut cells: Vec<Cell> = Vec::with_capacity(row.len());
    let mut pending: Option<u32> = None;
    let mut score = 0u64;

    for value in row.iter().flatten().copied() {
        match pending {
            None => pending = Some(value),
            Some(p) if p == value => {
                let merged = p
                    .checked_mul(2)
                    .ok_or(CoreError::TileOverflow { value: p })?;
                cells.push(Some(merged));
                score += merged as u64;
                pending = None;
            }
            Some(p) => {
                cells.push(Some(p));
                pending = Some(value);
            }
        }
    }
    if let Some(p) = pending {
        cells.push(Some(p));
    }
    cells.resize(row.len(), None);

    let moved = cells.as_slice() != row;
    Ok(RowCollapse {
        cells,
        moved,
        score,
    })
}
