use thiserror::Error;

/// Precondition violations on grids and the values used to address them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid is {rows}x{cols}, expected {size}x{size}")]
    WrongSize { rows: usize, cols: usize, size: usize },
    #[error("cell ({row}, {col}) holds {value}, expected a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },
    #[error("merging two {value} tiles overflows the cell type")]
    TileOverflow { value: u32 },
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("rotation must be 0, 90, 180 or 270 degrees, got {0}")]
    InvalidRotation(u16),
}
