use std::fmt;

use crate::grid::Grid;

/// Character drawn for a living cell
pub const ALIVE: char = 'X';

/// Character drawn for a dead cell
pub const DEAD: char = 'O';

/// Bytes needed to render a grid: one per cell, plus a newline for each row. Sizes too big to
/// allocate up front yield `0`, and the frame grows as it's drawn instead.
fn frame_capacity(rows: usize, columns: usize) -> usize {
    columns
        .checked_add(1)
        .and_then(|w| w.checked_mul(rows))
        .filter(|&n| n <= isize::MAX as usize)
        .unwrap_or(0)
}

impl Grid {
    /// Draw the grid as text, one line per row and one character per cell.
    ///
    /// Every line, including the last, ends with `\n`. A grid with no rows renders as an empty
    /// string.
    pub fn render(&self) -> String {
        let mut fb = String::with_capacity(frame_capacity(self.rows(), self.columns()));

        for row in 0..self.rows() {
            let start = self.xy_from(row, 0);
            let line = &self.cells()[start..start + self.columns()];

            fb.extend(line.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
            fb.push('\n');
        }

        fb
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
