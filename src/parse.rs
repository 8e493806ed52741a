use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::grid::Grid;
use crate::render::ALIVE;
use crate::render::DEAD;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected 'X' or 'O' at ({row}, {column}), but got '{got}'")]
    UnexpectedChar { row: usize, column: usize, got: char },

    #[error("Row {row} has {got} cells, expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Takes the next line from `s`, consuming its line break. `\r\n` is treated as a single line
/// break. Returns `None` once `s` is exhausted.
fn take_line(s: &str) -> (Option<(&str, bool)>, &str) {
    if s.is_empty() {
        return (None, s);
    }

    let (line, rest, terminated) = match s.split_once('\n') {
        Some((line, rest)) => (line, rest, true),
        None => (s, "", false),
    };

    let line = line.strip_suffix('\r').unwrap_or(line);

    (Some((line, terminated)), rest)
}

fn parse_row(row: usize, line: &str) -> Result<Vec<bool>, ParseError> {
    line.chars()
        .enumerate()
        .map(|(column, c)| match c {
            ALIVE => Ok(true),
            DEAD => Ok(false),
            got => Err(ParseError::UnexpectedChar { row, column, got }),
        })
        .collect()
}

/// Reads a grid back from the text `Grid::render` produces.
///
/// The number of columns is taken from the first row; every other row must match it.
impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut columns = None;

        while let (Some((line, terminated)), rest) = take_line(s) {
            if !terminated {
                warn!("Grid text is missing a line break after row {rows}");
            }

            let row = parse_row(rows, line)?;

            let expected = *columns.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ParseError::JaggedRow {
                    row: rows,
                    expected,
                    got: row.len(),
                });
            }

            cells.extend(row);
            rows += 1;
            s = rest;
        }

        Ok(Grid::from_cells(rows, columns.unwrap_or_default(), cells))
    }
}
