use crate::grid::Grid;
use crate::rules;

/// Compute the next day of `grid`.
///
/// Every cell of the result is decided from `grid` alone, never from a cell of the result, so all
/// cells change at once. The input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let cb = grid
        .cells()
        .iter()
        .enumerate()
        .map(|(i, &alive)| {
            let (row, column) = grid.xy_to(i);

            rules::next_state(alive, grid.neighbors(row, column))
        })
        .collect();

    Grid::from_cells(grid.rows(), grid.columns(), cb)
}
