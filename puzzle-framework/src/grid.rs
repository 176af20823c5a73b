//! A rectangular grid of cells parsed from lines of characters.
//!
//! Positions are [`Point2<usize>`] with `x` as the column and `y` as the row, both zero based from
//! the top left cell.

use nalgebra::Point2;
use thiserror::Error;

use crate::parsing::parse_input_lines;

/// A cell position in a [`Grid`]; `x` is the column, `y` is the row.
pub type Position = Point2<usize>;

/// Offsets to the eight cells around a position, row by row from the top left.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    /// There were no rows to build a grid from.
    #[error("input is empty, expected at least one row")]
    EmptyInput,

    /// A row's length differs from the first row's length.
    #[error("row {} has length {found}, expected length {expected} of the first row", .row + 1)]
    MismatchedRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An immutable rectangular grid, stored as rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    width: usize,
}

impl Grid<char> {
    /// Build a grid of characters from lines of text.
    ///
    /// Each line is trimmed of surrounding whitespace before being split into characters, and
    /// trailing blank lines are ignored.
    ///
    /// ```
    /// # use puzzle_framework::grid::{Grid, Position};
    /// let grid = Grid::from_lines("ab\ncd\n")?;
    /// assert_eq!((grid.width(), grid.height()), (2, 2));
    /// assert_eq!(grid.get(Position::new(1, 0)), Some(&'b'));
    /// assert_eq!(grid.get(Position::new(2, 0)), None);
    /// # Ok::<(), puzzle_framework::DynamicError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyInput`] if there are no rows.
    /// - [`GridError::MismatchedRowLength`] (wrapped in an
    ///   [`InvalidLine`][crate::parsing::InvalidLine]) if the rows are not all the same length.
    pub fn from_lines(input: &str) -> crate::DynamicResult<Self> {
        let mut expected_width = None;
        let rows: Vec<Vec<char>> = parse_input_lines(input.trim_end(), |row, line| {
            let cells: Vec<char> = line.trim().chars().collect();
            match expected_width {
                None => expected_width = Some(cells.len()),
                Some(expected) if expected != cells.len() => {
                    return Err(GridError::MismatchedRowLength {
                        row,
                        expected,
                        found: cells.len(),
                    }
                    .into());
                }
                Some(_) => {}
            }
            Ok(cells)
        })
        .collect::<Result<_, _>>()?;

        let width = expected_width.ok_or(GridError::EmptyInput)?;
        Ok(Self { rows, width })
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyInput`] if there are no rows.
    /// - [`GridError::MismatchedRowLength`] if a row's length differs from the first row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().ok_or(GridError::EmptyInput)?.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(GridError::MismatchedRowLength {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// The number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether a position lies within the grid.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height()
    }

    /// The cell at a position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.rows.get(position.y)?.get(position.x)
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every cell paired with its position, in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x, y), cell))
        })
    }

    /// The up to eight positions around `position` (cardinal and diagonal) that are in bounds.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = position.x.checked_add_signed(dx)?;
            let y = position.y.checked_add_signed(dy)?;
            let neighbor = Position::new(x, y);
            self.contains(neighbor).then_some(neighbor)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::DynamicResult;
    use crate::parsing::InvalidLine;

    #[test]
    fn from_lines_trims_rows() -> DynamicResult<()> {
        let grid = Grid::from_lines("  .#.\n#.#  \n\n\n")?;
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        let rows: Vec<String> = grid.rows().map(|row| row.iter().collect()).collect();
        assert_eq!(rows, vec![".#.", "#.#"]);
        Ok(())
    }

    #[test]
    fn from_lines_rejects_empty_input() {
        for input in ["", "\n\n", "   \n"] {
            let error = Grid::from_lines(input).err();
            let grid_error = error.as_deref().and_then(|e| e.downcast_ref::<GridError>());
            assert_eq!(grid_error, Some(&GridError::EmptyInput), "input {input:?}");
        }
    }

    #[test]
    fn from_lines_rejects_ragged_rows() {
        let error = Grid::from_lines("...\n..\n...").err();
        let invalid_line = error.as_deref().and_then(|e| e.downcast_ref::<InvalidLine>());
        assert_eq!(invalid_line.map(InvalidLine::line_index), Some(1));

        let source = invalid_line
            .and_then(std::error::Error::source)
            .and_then(|e| e.downcast_ref::<GridError>());
        assert_eq!(
            source,
            Some(&GridError::MismatchedRowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn from_lines_matches_from_rows() -> DynamicResult<()> {
        let grid = Grid::from_lines("ab\ncd\nef")?;
        let expected = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd'], vec!['e', 'f']])?;
        assert_eq!(grid, expected);
        assert_eq!(grid.width(), 2);
        Ok(())
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(
            result.err(),
            Some(GridError::MismatchedRowLength {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn entries_are_row_major() -> DynamicResult<()> {
        let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']])?;
        let entries: Vec<(Position, char)> =
            grid.entries().map(|(position, &cell)| (position, cell)).collect();
        assert_eq!(
            entries,
            vec![
                (Position::new(0, 0), 'a'),
                (Position::new(1, 0), 'b'),
                (Position::new(0, 1), 'c'),
                (Position::new(1, 1), 'd'),
            ]
        );
        Ok(())
    }

    #[test]
    fn neighbors_are_clipped_to_bounds() -> DynamicResult<()> {
        let grid = Grid::from_lines("...\n...\n...")?;

        let center: HashSet<Position> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(center.len(), 8);
        assert!(!center.contains(&Position::new(1, 1)));

        let corner: HashSet<Position> = grid.neighbors(Position::new(0, 0)).collect();
        let expected: HashSet<Position> = [
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(corner, expected);

        let edge = grid.neighbors(Position::new(2, 1)).count();
        assert_eq!(edge, 5);
        Ok(())
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() -> DynamicResult<()> {
        let grid = Grid::from_lines("*")?;
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 0);
        Ok(())
    }
}
