//! Seed solving command
//!
//! Generates the puzzle for a seed and searches it for a high-scoring
//! move sequence.

use crate::core::GameState;
use crate::engine::Engine;
use crate::generator::{GenerationError, generate};
use crate::solver::{SearchConfig, SearchReport, best_first_search};

/// Configuration for solving a seed
pub struct SolveConfig {
    pub seed: u64,
    pub search: SearchConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            search: SearchConfig::default(),
        }
    }
}

/// Result of solving a seed
pub struct SolveResult {
    pub base_seed: u64,
    /// Seed offset the generator needed to reach a word-free board
    pub offset: u64,
    pub initial: GameState,
    pub report: SearchReport,
}

/// Generate the puzzle for `config.seed` and search it
///
/// # Errors
///
/// Returns an error if no word-free board exists near the seed, which
/// only happens with degenerate dictionaries.
pub fn solve_seed(config: &SolveConfig, engine: &Engine) -> Result<SolveResult, GenerationError> {
    let puzzle = generate(config.seed, engine)?;
    let initial = puzzle.state.clone();
    let report = best_first_search(engine, puzzle.state, &config.search);

    Ok(SolveResult {
        base_seed: puzzle.base_seed,
        offset: puzzle.offset,
        initial,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{Dictionary, MatchPolicy};

    fn small_search(seed: u64, max_nodes: usize) -> SolveConfig {
        let mut config = SolveConfig::new(seed);
        config.search.max_nodes = max_nodes;
        config
    }

    #[test]
    fn solve_starts_from_a_fresh_puzzle() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let result = solve_seed(&small_search(42, 100), &engine).unwrap();

        assert_eq!(result.base_seed, 42);
        assert_eq!(result.initial.score(), 0);
        assert_eq!(result.initial.moves(), 0);
        assert_eq!(result.initial.queue().len(), 15);
    }

    #[test]
    fn solve_path_replays_to_reported_state() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let result = solve_seed(&small_search(7, 1_500), &engine).unwrap();

        let mut state = result.initial.clone();
        for &mv in &result.report.best_moves {
            state = engine.apply_move(&state, mv).unwrap();
        }
        assert_eq!(state, result.report.best_state);
    }

    #[test]
    fn solve_respects_node_budget() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let result = solve_seed(&small_search(3, 50), &engine).unwrap();
        assert_eq!(result.report.nodes_expanded, 50);
    }

    #[test]
    fn solve_is_deterministic() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let first = solve_seed(&small_search(11, 500), &engine).unwrap();
        let second = solve_seed(&small_search(11, 500), &engine).unwrap();

        assert_eq!(first.report.best_moves, second.report.best_moves);
        assert_eq!(first.report.best_score(), second.report.best_score());
        assert_eq!(first.offset, second.offset);
    }
}
