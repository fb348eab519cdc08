//! Game state snapshots
//!
//! A GameState is one immutable snapshot of a puzzle: the grid, the letters
//! still queued, the permanent slide locks, and the detected words with
//! their score. Transitions build a fresh snapshot; earlier ones stay valid,
//! which is what lets the solver fan out thousands of speculative futures
//! from a shared parent.

use super::grid::{GRID_SIZE, Grid};
use super::highlight::Highlight;
use super::moves::{Direction, Move};
use std::fmt;

/// Per-line, per-direction permanent slide locks
///
/// Playing a slide locks the opposite direction on that line for the rest
/// of the game. Re-locking an already locked direction changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Restrictions {
    rows_left: [bool; GRID_SIZE],
    rows_right: [bool; GRID_SIZE],
    cols_up: [bool; GRID_SIZE],
    cols_down: [bool; GRID_SIZE],
}

impl Restrictions {
    /// No locks: every direction open on every line
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether `mv` is currently locked
    #[must_use]
    pub const fn is_restricted(&self, mv: Move) -> bool {
        match mv.direction() {
            Direction::Left => self.rows_left[mv.index()],
            Direction::Right => self.rows_right[mv.index()],
            Direction::Up => self.cols_up[mv.index()],
            Direction::Down => self.cols_down[mv.index()],
        }
    }

    /// Copy of `self` with the opposite of `mv` locked on its line
    #[must_use]
    pub const fn locking_opposite(&self, mv: Move) -> Self {
        let mut next = *self;
        match mv.direction() {
            Direction::Left => next.rows_right[mv.index()] = true,
            Direction::Right => next.rows_left[mv.index()] = true,
            Direction::Up => next.cols_down[mv.index()] = true,
            Direction::Down => next.cols_up[mv.index()] = true,
        }
        next
    }

    /// Number of line directions still open
    #[must_use]
    pub fn open_count(&self) -> usize {
        let locked = self
            .rows_left
            .iter()
            .chain(&self.rows_right)
            .chain(&self.cols_up)
            .chain(&self.cols_down)
            .filter(|&&locked| locked)
            .count();
        4 * GRID_SIZE - locked
    }
}

/// Error type for rejected slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The queue has no letters left to insert
    QueueEmpty,
    /// The line was slid the other way earlier and is now locked
    Restricted(Move),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueEmpty => write!(f, "Letter queue is empty"),
            Self::Restricted(mv) => {
                write!(f, "Cannot slide {mv}: locked by an earlier opposite slide")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// One immutable snapshot of a puzzle in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    queue: Vec<u8>,
    restrictions: Restrictions,
    highlights: Vec<Highlight>,
    score: u32,
    moves: u32,
    last_inserted: Option<(usize, usize)>,
}

impl GameState {
    pub(crate) fn new(
        grid: Grid,
        queue: Vec<u8>,
        restrictions: Restrictions,
        highlights: Vec<Highlight>,
        score: u32,
        moves: u32,
        last_inserted: Option<(usize, usize)>,
    ) -> Self {
        Self {
            grid,
            queue,
            restrictions,
            highlights,
            score,
            moves,
            last_inserted,
        }
    }

    /// The current board
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Letters waiting to enter the board, next letter first
    #[inline]
    #[must_use]
    pub fn queue(&self) -> &[u8] {
        &self.queue
    }

    /// The permanent slide locks accumulated so far
    #[inline]
    #[must_use]
    pub const fn restrictions(&self) -> &Restrictions {
        &self.restrictions
    }

    /// Words currently detected on the board
    #[inline]
    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Total letters covered by the current highlights
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Moves played since the initial state
    #[inline]
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Cell the most recent queue letter landed in, if any move was played
    #[inline]
    #[must_use]
    pub const fn last_inserted(&self) -> Option<(usize, usize)> {
        self.last_inserted
    }

    /// Whether the game is over: no letters left to insert
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Every move playable from this state
    ///
    /// Empty once the queue runs out. Enumeration order is fixed (line 0..4,
    /// each line left, right, up, down) so callers iterating it behave
    /// deterministically.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.queue.is_empty() {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity(4 * GRID_SIZE);
        for index in 0..GRID_SIZE {
            for direction in Direction::ALL {
                let mv = Move::new(direction, index);
                if !self.restrictions.is_restricted(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}
