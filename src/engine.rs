//! Move application
//!
//! The Engine bundles a dictionary with a match policy and turns slides
//! into fresh [`GameState`] snapshots. It is the one place transitions
//! happen; everything else reads states and never writes them.

use crate::core::{GameState, Grid, Move, MoveError, Restrictions};
use crate::words::{Dictionary, MatchPolicy, find_words, word_score};

/// Applies moves and produces new game states
///
/// Holds a reference to the dictionary so every snapshot it builds gets
/// its highlights and score recomputed the same way. All methods are pure
/// with respect to their inputs: a state passed in is never modified.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    dictionary: &'a Dictionary,
    policy: MatchPolicy,
}

impl<'a> Engine<'a> {
    /// Create an engine over a dictionary and match policy
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, policy: MatchPolicy) -> Self {
        Self { dictionary, policy }
    }

    /// The dictionary this engine detects words against
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The match policy in effect
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Build the starting snapshot for a board and queue
    ///
    /// Highlights and score are computed immediately; no moves played,
    /// no locks set.
    #[must_use]
    pub fn initial_state(&self, grid: Grid, queue: Vec<u8>) -> GameState {
        let highlights = find_words(&grid, self.dictionary, self.policy);
        let score = word_score(&highlights);
        GameState::new(grid, queue, Restrictions::none(), highlights, score, 0, None)
    }

    /// Apply one slide to a state, returning the successor state
    ///
    /// The head of the queue enters the board at the cell the slide frees,
    /// the letter pushed off the far edge is gone for good, and the
    /// opposite direction of the slid line is locked from here on.
    /// Highlights and score are recomputed on the new board.
    ///
    /// # Errors
    /// Returns `MoveError::QueueEmpty` if no letters remain to insert, or
    /// `MoveError::Restricted` if the line is locked against this direction.
    pub fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError> {
        let Some((&incoming, rest)) = state.queue().split_first() else {
            return Err(MoveError::QueueEmpty);
        };
        if state.restrictions().is_restricted(mv) {
            return Err(MoveError::Restricted(mv));
        }

        let grid = state.grid().slide(mv, incoming);
        let restrictions = state.restrictions().locking_opposite(mv);
        let highlights = find_words(&grid, self.dictionary, self.policy);
        let score = word_score(&highlights);

        Ok(GameState::new(
            grid,
            rest.to_vec(),
            restrictions,
            highlights,
            score,
            state.moves() + 1,
            Some(mv.landing_cell()),
        ))
    }
}
