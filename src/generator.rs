//! Seeded board generation
//!
//! A Park-Miller linear congruential generator turns one integer seed into
//! the day's board and letter queue, drawing letters from a Scrabble tile
//! frequency table. Boards that already contain a word are rejected and
//! regenerated with an incrementing seed offset, up to a fixed cap.

use crate::core::{GRID_SIZE, GameState, Grid};
use crate::engine::Engine;
use std::fmt;

/// Letters dealt into the queue at the start of a puzzle
pub const QUEUE_SIZE: usize = 15;

/// Seed offsets tried before generation gives up
pub const MAX_GENERATION_ATTEMPTS: u64 = 1_000;

const LCG_MULTIPLIER: u64 = 16_807;
const LCG_MODULUS: u64 = 2_147_483_647;

/// Largest seed with its own letter stream; larger seeds wrap modulo
/// `2^31 - 1`
pub const MAX_SEED: u64 = LCG_MODULUS - 1;

/// Scrabble letter tile counts (blanks excluded)
const TILE_COUNTS: [(u8, u32); 26] = [
    (b'a', 9),
    (b'b', 2),
    (b'c', 2),
    (b'd', 4),
    (b'e', 12),
    (b'f', 2),
    (b'g', 3),
    (b'h', 2),
    (b'i', 9),
    (b'j', 1),
    (b'k', 1),
    (b'l', 4),
    (b'm', 2),
    (b'n', 6),
    (b'o', 8),
    (b'p', 2),
    (b'q', 1),
    (b'r', 6),
    (b's', 4),
    (b't', 6),
    (b'u', 4),
    (b'v', 2),
    (b'w', 2),
    (b'x', 1),
    (b'y', 2),
    (b'z', 1),
];

const TILE_TOTAL: u32 = {
    let mut sum = 0;
    let mut i = 0;
    while i < TILE_COUNTS.len() {
        sum += TILE_COUNTS[i].1;
        i += 1;
    }
    sum
};

/// Minimal-standard multiplicative LCG (Park-Miller)
///
/// `state(n+1) = state(n) * 16807 mod (2^31 - 1)`. The modulus is prime, so
/// any nonzero state cycles through the full period; zero is the one fixed
/// point and gets nudged to one at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from an arbitrary seed
    ///
    /// The seed is reduced into the generator's state space; congruent
    /// seeds produce identical streams.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let state = seed % LCG_MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Next draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        (self.state - 1) as f64 / (LCG_MODULUS - 1) as f64
    }

    /// Next integer draw in `min..=max`
    pub fn next_int(&mut self, min: u64, max: u64) -> u64 {
        min + (self.next_f64() * (max - min + 1) as f64) as u64
    }
}

/// One weighted letter draw from the tile table
fn draw_letter(rng: &mut SeededRng) -> u8 {
    let mut roll = rng.next_int(0, u64::from(TILE_TOTAL) - 1);
    for &(letter, count) in &TILE_COUNTS {
        if roll < u64::from(count) {
            return letter;
        }
        roll -= u64::from(count);
    }
    // The tile counts cover every roll below TILE_TOTAL
    b'e'
}

/// Deterministic board and queue for one exact seed, no validity check
///
/// The 25 grid cells are drawn first in row-major order, then the 15
/// queue letters.
#[must_use]
pub fn generate_letters(seed: u64) -> (Grid, Vec<u8>) {
    let mut rng = SeededRng::new(seed);

    let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
    for row in &mut cells {
        for cell in row.iter_mut() {
            *cell = draw_letter(&mut rng);
        }
    }
    let queue = (0..QUEUE_SIZE).map(|_| draw_letter(&mut rng)).collect();

    (Grid::from_lower(cells), queue)
}

/// Error type for generation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    pub base_seed: u64,
    pub attempts: u64,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No word-free board within {} seed offsets of {}",
            self.attempts, self.base_seed
        )
    }
}

impl std::error::Error for GenerationError {}

/// A generated puzzle plus its provenance
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Fresh initial state: full queue, no moves, no locks, zero score
    pub state: GameState,
    /// The seed as requested
    pub base_seed: u64,
    /// Offset added to the base seed to reach a word-free board
    pub offset: u64,
}

impl GeneratedPuzzle {
    /// The seed whose letter stream actually built the board
    #[must_use]
    pub const fn effective_seed(&self) -> u64 {
        self.base_seed.wrapping_add(self.offset)
    }
}

/// Generate the puzzle for a seed, resampling until the board has no words
///
/// A fair starting board must not score before the first move, so boards
/// containing any detected word are discarded and the seed bumped by one.
///
/// # Errors
/// Returns `GenerationError` if no word-free board turns up within
/// [`MAX_GENERATION_ATTEMPTS`] offsets.
pub fn generate(seed: u64, engine: &Engine) -> Result<GeneratedPuzzle, GenerationError> {
    for offset in 0..MAX_GENERATION_ATTEMPTS {
        let (grid, queue) = generate_letters(seed.wrapping_add(offset));
        let state = engine.initial_state(grid, queue);
        if state.highlights().is_empty() {
            return Ok(GeneratedPuzzle {
                state,
                base_seed: seed,
                offset,
            });
        }
    }
    Err(GenerationError {
        base_seed: seed,
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
