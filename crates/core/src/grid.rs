//! grid representation - row-major rows of optional tile values
//! every edit returns a fresh grid, so snapshots can be cloned and kept

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One board position. `None` is empty, `Some(v)` is a power of two >= 2.
pub type Cell = Option<u32>;

/// Board of cells, stored as rows top to bottom.
///
/// The engine treats a `Grid` as an immutable value: moves, rotations and
/// spawns all produce a new grid. Serializes as a JSON array of rows with
/// `null` for empty cells.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Classic board edge length.
    pub const DEFAULT_SIZE: usize = 4;

    /// All-empty `size`x`size` grid.
    pub fn empty(size: usize) -> Self {
        Self {
            rows: vec![vec![None; size]; size],
        }
    }

    /// Wrap rows as-is. Shape is not checked here; see [`Grid::shape`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Build from plain numbers where `0` marks an empty cell.
    pub fn from_values<R: AsRef<[u32]>>(rows: &[R]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&v| if v == 0 { None } else { Some(v) })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Inverse of [`Grid::from_values`].
    pub fn to_values(&self) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.unwrap_or(0)).collect())
            .collect()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row; 0 for a grid without rows.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Cell at (`row`, `col`). Out of bounds reads as empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Copy of this grid with one cell replaced.
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
        next
    }

    /// `(rows, cols)` if every row has the same, non-zero length.
    pub fn shape(&self) -> Result<(usize, usize), CoreError> {
        let cols = self.width();
        if self.rows.is_empty() || cols == 0 {
            return Err(CoreError::EmptyGrid);
        }
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(CoreError::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }
        Ok((self.rows.len(), cols))
    }

    /// Full check for grids coming from outside: `size`x`size` and every
    /// tile a power of two >= 2.
    pub fn validate(&self, size: usize) -> Result<(), CoreError> {
        let (rows, cols) = self.shape()?;
        if rows != size || cols != size {
            return Err(CoreError::WrongSize { rows, cols, size });
        }
        for (row, col, value) in self.tiles() {
            if value < 2 || !value.is_power_of_two() {
                return Err(CoreError::InvalidTile { row, col, value });
            }
        }
        Ok(())
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    pub fn has_empty(&self) -> bool {
        self.rows.iter().any(|row| row.iter().any(Option::is_none))
    }

    /// Occupied cells as `(row, col, value)` in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|v| (r, c, v)))
        })
    }

    pub fn contains(&self, value: u32) -> bool {
        self.tiles().any(|(_, _, v)| v == value)
    }

    /// Sum of all tile values.
    pub fn total(&self) -> u64 {
        self.tiles().map(|(_, _, v)| v as u64).sum()
    }

    pub fn max_tile(&self) -> Option<u32> {
        self.tiles().map(|(_, _, v)| v).max()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .tiles()
            .map(|(_, _, v)| v.to_string().len())
            .max()
            .unwrap_or(1)
            .max(4);
        for row in &self.rows {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(v) => write!(f, "{:>width$}", v)?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
