//! Slide moves
//!
//! A Move names one line of the grid and the direction it shifts. Moves are
//! plain values; legality against a particular state is the engine's job.

use super::grid::GRID_SIZE;
use std::fmt;

/// Direction a row or column shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in move enumeration order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The direction this one locks when played
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Whether this direction slides a row
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One slide: a direction plus the index of the row or column it moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    direction: Direction,
    index: usize,
}

impl Move {
    /// Create a move
    ///
    /// # Panics
    /// Panics if `index` >= 5
    #[must_use]
    pub fn new(direction: Direction, index: usize) -> Self {
        assert!(index < GRID_SIZE, "line index {index} out of range");
        Self { direction, index }
    }

    /// Slide row `row` left
    #[must_use]
    pub fn left(row: usize) -> Self {
        Self::new(Direction::Left, row)
    }

    /// Slide row `row` right
    #[must_use]
    pub fn right(row: usize) -> Self {
        Self::new(Direction::Right, row)
    }

    /// Slide column `col` up
    #[must_use]
    pub fn up(col: usize) -> Self {
        Self::new(Direction::Up, col)
    }

    /// Slide column `col` down
    #[must_use]
    pub fn down(col: usize) -> Self {
        Self::new(Direction::Down, col)
    }

    #[inline]
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Cell where the incoming queue letter lands after this slide
    ///
    /// Sliding left frees the right edge of the row, sliding right the left
    /// edge; sliding up frees the bottom of the column, sliding down the top.
    #[must_use]
    pub const fn landing_cell(self) -> (usize, usize) {
        match self.direction {
            Direction::Left => (self.index, GRID_SIZE - 1),
            Direction::Right => (self.index, 0),
            Direction::Up => (GRID_SIZE - 1, self.index),
            Direction::Down => (0, self.index),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction.is_horizontal() {
            write!(f, "row {} {}", self.index, self.direction)
        } else {
            write!(f, "col {} {}", self.index, self.direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn horizontal_split() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }

    #[test]
    fn landing_cells() {
        assert_eq!(Move::left(2).landing_cell(), (2, 4));
        assert_eq!(Move::right(2).landing_cell(), (2, 0));
        assert_eq!(Move::up(3).landing_cell(), (4, 3));
        assert_eq!(Move::down(3).landing_cell(), (0, 3));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let _ = Move::left(5);
    }

    #[test]
    fn display() {
        assert_eq!(Move::left(2).to_string(), "row 2 left");
        assert_eq!(Move::down(0).to_string(), "col 0 down");
    }
}
