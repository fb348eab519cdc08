//! Sliding letter grid
//!
//! A Grid stores the 5x5 board as lower-case ASCII bytes and provides the
//! pure slide operation every move is built from.

use super::moves::{Direction, Move};
use std::fmt;

/// Number of rows and columns on the board
pub const GRID_SIZE: usize = 5;

/// A 5x5 letter grid
///
/// Cells hold lower-case ASCII letters. A Grid is an immutable value:
/// [`slide`](Grid::slide) returns a new Grid and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

/// Error type for invalid grid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    WrongCellCount(usize),
    InvalidLetter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCellCount(count) => {
                write!(
                    f,
                    "Grid needs exactly {} letters, got {count}",
                    GRID_SIZE * GRID_SIZE
                )
            }
            Self::InvalidLetter(ch) => write!(f, "Grid letter {ch:?} is not an ASCII letter"),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from 25 letters in row-major order, whitespace ignored
    ///
    /// Letters are normalized to lower case.
    ///
    /// # Errors
    /// Returns `GridError` if:
    /// - The input does not contain exactly 25 letters
    /// - Any letter is not ASCII alphabetic
    ///
    /// # Examples
    /// ```
    /// use queuedle_solver::core::Grid;
    ///
    /// let grid = Grid::parse("catse qjqjq xvxvx zkzkz bdbdb").unwrap();
    /// assert_eq!(grid.get(0, 0), b'c');
    /// assert_eq!(grid.get(0, 4), b'e');
    ///
    /// assert!(Grid::parse("too short").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut count = 0;

        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter(ch));
            }
            if count < GRID_SIZE * GRID_SIZE {
                cells[count / GRID_SIZE][count % GRID_SIZE] = (ch as u8).to_ascii_lowercase();
            }
            count += 1;
        }

        if count != GRID_SIZE * GRID_SIZE {
            return Err(GridError::WrongCellCount(count));
        }

        Ok(Self { cells })
    }

    /// Create a grid from a row-major cell array
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` if any byte is not an ASCII letter.
    pub fn from_cells(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for row in &cells {
            for &cell in row {
                if !cell.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter(cell as char));
                }
            }
        }
        let mut cells = cells;
        for row in &mut cells {
            for cell in row.iter_mut() {
                *cell = cell.to_ascii_lowercase();
            }
        }
        Ok(Self { cells })
    }

    /// Create a grid from cells already known to be lower-case ASCII letters
    pub(crate) const fn from_lower(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the letter at a cell
    ///
    /// # Panics
    /// Panics if `row` or `col` >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Get one row as a byte array
    ///
    /// # Panics
    /// Panics if `row` >= 5
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> [u8; GRID_SIZE] {
        self.cells[row]
    }

    /// Get one column as a byte array
    ///
    /// # Panics
    /// Panics if `col` >= 5
    #[inline]
    #[must_use]
    pub const fn column(&self, col: usize) -> [u8; GRID_SIZE] {
        let mut out = [0u8; GRID_SIZE];
        let mut row = 0;
        while row < GRID_SIZE {
            out[row] = self.cells[row][col];
            row += 1;
        }
        out
    }

    /// Get the full cell array in row-major order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Apply one slide, pushing `incoming` into the freed cell
    ///
    /// The line named by `mv` shifts one cell in the move's direction; the
    /// letter pushed off the far edge is discarded and `incoming` lands in
    /// the cell the shift vacated (see [`Move::landing_cell`]).
    #[must_use]
    pub fn slide(&self, mv: Move, incoming: u8) -> Self {
        let incoming = incoming.to_ascii_lowercase();
        let mut cells = self.cells;
        let index = mv.index();

        match mv.direction() {
            Direction::Left => {
                cells[index].copy_within(1.., 0);
                cells[index][GRID_SIZE - 1] = incoming;
            }
            Direction::Right => {
                cells[index].copy_within(..GRID_SIZE - 1, 1);
                cells[index][0] = incoming;
            }
            Direction::Up => {
                for row in 0..GRID_SIZE - 1 {
                    cells[row][index] = cells[row + 1][index];
                }
                cells[GRID_SIZE - 1][index] = incoming;
            }
            Direction::Down => {
                for row in (1..GRID_SIZE).rev() {
                    cells[row][index] = cells[row - 1][index];
                }
                cells[0][index] = incoming;
            }
        }

        Self { cells }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.to_ascii_uppercase() as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::parse("abcde fghij klmno pqrst uvwxy").unwrap()
    }

    #[test]
    fn parse_valid() {
        let grid = sample();
        assert_eq!(grid.get(0, 0), b'a');
        assert_eq!(grid.get(2, 2), b'm');
        assert_eq!(grid.get(4, 4), b'y');
    }

    #[test]
    fn parse_normalizes_case() {
        let upper = Grid::parse("ABCDE FGHIJ KLMNO PQRST UVWXY").unwrap();
        assert_eq!(upper, sample());
    }

    #[test]
    fn parse_wrong_count() {
        assert!(matches!(
            Grid::parse("abcde"),
            Err(GridError::WrongCellCount(5))
        ));
        assert!(matches!(
            Grid::parse(""),
            Err(GridError::WrongCellCount(0))
        ));
    }

    #[test]
    fn parse_invalid_letter() {
        assert!(matches!(
            Grid::parse("abcd3 fghij klmno pqrst uvwxy"),
            Err(GridError::InvalidLetter('3'))
        ));
    }

    #[test]
    fn from_cells_rejects_non_letters() {
        let mut cells = *sample().cells();
        cells[1][1] = b'!';
        assert!(Grid::from_cells(cells).is_err());
    }

    #[test]
    fn rows_and_columns() {
        let grid = sample();
        assert_eq!(grid.row(0), *b"abcde");
        assert_eq!(grid.row(4), *b"uvwxy");
        assert_eq!(grid.column(0), *b"afkpu");
        assert_eq!(grid.column(4), *b"ejoty");
    }

    #[test]
    fn slide_left_lands_on_right_edge() {
        let grid = sample().slide(Move::left(1), b'z');
        assert_eq!(grid.row(1), *b"ghijz");
        // Other rows untouched
        assert_eq!(grid.row(0), *b"abcde");
        assert_eq!(grid.row(2), *b"klmno");
    }

    #[test]
    fn slide_right_lands_on_left_edge() {
        let grid = sample().slide(Move::right(1), b'z');
        assert_eq!(grid.row(1), *b"zfghi");
    }

    #[test]
    fn slide_up_lands_on_bottom_edge() {
        let grid = sample().slide(Move::up(2), b'z');
        assert_eq!(grid.column(2), *b"hmrwz");
        // Other columns untouched
        assert_eq!(grid.column(1), *b"bglqv");
    }

    #[test]
    fn slide_down_lands_on_top_edge() {
        let grid = sample().slide(Move::down(2), b'z');
        assert_eq!(grid.column(2), *b"zchmr");
    }

    #[test]
    fn slide_leaves_original_untouched() {
        let grid = sample();
        let _ = grid.slide(Move::left(0), b'z');
        assert_eq!(grid, sample());
    }

    #[test]
    fn slide_normalizes_incoming_letter() {
        let grid = sample().slide(Move::left(0), b'Z');
        assert_eq!(grid.get(0, 4), b'z');
    }

    #[test]
    fn display_uppercase() {
        let text = sample().to_string();
        assert!(text.starts_with("A B C D E\n"));
        assert!(text.ends_with("U V W X Y"));
    }
}
