use std::fmt;

use tracing::debug;
use tracing::trace;

use crate::grid::Grid;
use crate::grid::GridError;
use crate::step::step;

/// A running game: the current grid, and how many days have passed.
#[derive(Debug)]
pub struct Simulation {
    /// Today's grid. Replaced wholesale by every call to `advance_day`
    grid: Grid,

    /// Days advanced since the simulation started
    day: usize,
}

impl Simulation {
    /// Start a simulation on a `rows` by `columns` grid with no life in it.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(rows, columns, false)?))
    }

    /// Start a simulation from an already seeded grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, day: 0 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn day(&self) -> usize {
        self.day
    }

    /// Bring the cell at `(row, column)` to life.
    pub fn add_life(&mut self, row: usize, column: usize) -> Result<(), GridError> {
        self.grid.set_life(row, column, true)?;

        trace!(row, column, "added life");

        Ok(())
    }

    pub fn has_life(&self) -> bool {
        self.grid.has_life()
    }

    /// Move the simulation forward by one day. Works on extinct grids too, which just stay
    /// extinct.
    pub fn advance_day(&mut self) {
        self.grid = step(&self.grid);
        self.day += 1;

        debug!(
            day = self.day,
            population = self.grid.population(),
            "advanced day"
        );
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
