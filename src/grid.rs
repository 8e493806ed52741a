use thiserror::Error;

/// Offsets of the 8 cells surrounding a cell, as `(row, column)`.
///
/// ```notrust
///   (-1,-1) (-1, 0) (-1, 1)
///   ( 0,-1)    .    ( 0, 1)
///   ( 1,-1) ( 1, 0) ( 1, 1)
/// ```
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell ({row}, {column}) is outside of a {rows}x{columns} grid")]
    InvalidCoordinate {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("A {rows}x{columns} grid has too many cells to allocate")]
    InvalidDimensions { rows: usize, columns: usize },
}

/// A fixed size rectangle of cells, each either alive or dead.
///
/// Cells are addressed as `(row, column)` starting from `(0, 0)` in the top left corner. The size
/// of a grid is set when it's created and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// The cell buffer, stored row by row
    cb: Vec<bool>,

    /// Number of rows
    rows: usize,

    /// Number of columns
    columns: usize,
}

impl Grid {
    /// Create a `rows` by `columns` grid where every cell is set to `initial`.
    ///
    /// Grids with no rows or no columns are fine, they just don't hold any cells.
    pub fn new(rows: usize, columns: usize, initial: bool) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { rows, columns };

        // A `Vec` can't hold more than `isize::MAX` bytes
        let Some(n) = rows.checked_mul(columns).filter(|&n| n <= isize::MAX as usize) else {
            return Err(invalid);
        };

        let mut cb = Vec::new();
        cb.try_reserve_exact(n).map_err(|_| invalid)?;
        cb.resize(n, initial);

        Ok(Self { cb, rows, columns })
    }

    /// Create a grid with the same dimensions as `other`, where every cell is set to `initial`.
    ///
    /// A grid with no rows yields a `0x0` grid, whatever its column count.
    pub fn new_like(other: &Grid, initial: bool) -> Self {
        let (rows, columns) = if other.rows == 0 {
            (0, 0)
        } else {
            (other.rows, other.columns)
        };

        Self {
            cb: vec![initial; rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[bool] {
        &self.cb
    }

    pub fn get_life(&self, row: usize, column: usize) -> Result<bool, GridError> {
        let i = self.index_from(row, column)?;

        Ok(self.cb[i])
    }

    pub fn set_life(&mut self, row: usize, column: usize, alive: bool) -> Result<(), GridError> {
        let i = self.index_from(row, column)?;

        self.cb[i] = alive;

        Ok(())
    }

    /// Whether at least one cell is alive
    pub fn has_life(&self) -> bool {
        self.cb.iter().any(|&alive| alive)
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cb.iter().filter(|&&alive| alive).count()
    }

    /// Count how many of the (up to 8) cells around `(row, column)` are alive.
    ///
    /// Positions past the edge of the grid don't count, the grid does not wrap around.
    pub fn living_neighbor_count(&self, row: usize, column: usize) -> Result<u8, GridError> {
        self.index_from(row, column)?;

        Ok(self.neighbors(row, column))
    }

    /// Like `living_neighbor_count`, for coordinates already known to be in range.
    pub(crate) fn neighbors(&self, row: usize, column: usize) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBORS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
            else {
                continue;
            };

            if r < self.rows && c < self.columns && self.cb[self.xy_from(r, c)] {
                n += 1;
            }
        }

        n
    }

    /// Checked conversion of `(row, column)` to an index into the cell buffer
    fn index_from(&self, row: usize, column: usize) -> Result<usize, GridError> {
        if row >= self.rows || column >= self.columns {
            return Err(GridError::InvalidCoordinate {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(self.xy_from(row, column))
    }

    pub(crate) fn xy_from(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub(crate) fn xy_to(&self, i: usize) -> (usize, usize) {
        (i / self.columns, i % self.columns)
    }

    /// Build a grid directly from a row-major cell buffer. `cb` must hold `rows * columns` cells.
    pub(crate) fn from_cells(rows: usize, columns: usize, cb: Vec<bool>) -> Self {
        debug_assert_eq!(cb.len(), rows * columns);

        Self { cb, rows, columns }
    }
}
