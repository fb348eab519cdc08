//! Puzzle display command
//!
//! Generates the puzzle for a seed without searching it.

use crate::engine::Engine;
use crate::generator::{GeneratedPuzzle, GenerationError, generate, generate_letters};

/// Configuration for showing a puzzle
pub struct ShowConfig {
    pub seed: u64,
    /// Skip the word-free resampling and show the seed's raw letters
    pub raw: bool,
}

/// Build the puzzle a seed produces
///
/// Raw mode takes the seed's letter stream as-is, so the board may open
/// with words already on it. That is the stream `generate` rejects, which
/// makes raw mode handy for inspecting why a seed needed an offset.
///
/// # Errors
///
/// Returns an error if no word-free board exists near the seed; raw mode
/// never fails.
pub fn show_puzzle(
    config: &ShowConfig,
    engine: &Engine,
) -> Result<GeneratedPuzzle, GenerationError> {
    if config.raw {
        let (grid, queue) = generate_letters(config.seed);
        return Ok(GeneratedPuzzle {
            state: engine.initial_state(grid, queue),
            base_seed: config.seed,
            offset: 0,
        });
    }
    generate(config.seed, engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{Dictionary, MatchPolicy};

    #[test]
    fn show_matches_generate() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let config = ShowConfig {
            seed: 42,
            raw: false,
        };
        let shown = show_puzzle(&config, &engine).unwrap();
        let generated = generate(42, &engine).unwrap();

        assert_eq!(shown.state, generated.state);
        assert_eq!(shown.offset, generated.offset);
    }

    #[test]
    fn raw_mode_keeps_the_base_seed_letters() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let config = ShowConfig { seed: 42, raw: true };
        let shown = show_puzzle(&config, &engine).unwrap();

        let (grid, queue) = generate_letters(42);
        assert_eq!(*shown.state.grid(), grid);
        assert_eq!(shown.state.queue(), queue.as_slice());
        assert_eq!(shown.offset, 0);
    }
}
