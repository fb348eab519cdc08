//! Best-first search over move sequences
//!
//! Pops the most promising known state, banks its score if it beats the
//! best seen so far, then pushes every legal successor. The priority is
//! greedy (current score plus letters still in the queue), so the search
//! is not exhaustive and claims no optimality; it trades that for finding
//! good lines fast under a node budget.

use super::fingerprint::{FingerprintScope, fingerprint};
use super::frontier::Frontier;
use crate::core::{GameState, Move};
use crate::engine::Engine;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Limits and policies for one search call
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Node budget: the search stops after this many dequeues, duplicates
    /// included
    pub max_nodes: usize,
    /// What the visited-set fingerprint covers
    pub fingerprint: FingerprintScope,
    /// Optional wall-clock cutoff
    pub deadline: Option<Duration>,
}

impl SearchConfig {
    /// Default node budget
    pub const DEFAULT_MAX_NODES: usize = 200_000;
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            fingerprint: FingerprintScope::default(),
            deadline: None,
        }
    }
}

/// One frontier entry: a reachable state and the moves that reached it
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    pub path: Vec<Move>,
    pub priority: u32,
}

/// What a search found
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Highest-scoring state among all dequeued nodes; score ties go to
    /// the earliest-dequeued, which keeps results reproducible
    pub best_state: GameState,
    /// Moves from the initial state to `best_state`
    pub best_moves: Vec<Move>,
    /// Nodes dequeued before stopping
    pub nodes_expanded: usize,
    /// Wall time the search took
    pub duration: Duration,
}

impl SearchReport {
    /// Score of the best state found
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_state.score()
    }
}

/// Search move sequences from `initial`, best-first, under `config`
///
/// A node's priority is its state's score plus the number of letters the
/// initial queue still held at that node's depth, which favors both
/// already-scoring boards and shallow nodes with letters left to spend.
/// The visited set drops states whose fingerprint was already dequeued;
/// with the grid-only scope that merges paths aggressively (see
/// [`FingerprintScope`]). The best state is banked at dequeue time, so a
/// high score found just before the budget runs out still counts even if
/// its continuations go unexplored.
#[must_use]
pub fn best_first_search(
    engine: &Engine,
    initial: GameState,
    config: &SearchConfig,
) -> SearchReport {
    let start = Instant::now();
    let initial_queue_len = initial.queue().len() as u32;

    let mut frontier = Frontier::new();
    let mut visited: FxHashSet<u64> = FxHashSet::default();

    let root = SearchNode {
        priority: initial.score() + initial_queue_len,
        state: initial,
        path: Vec::new(),
    };
    let mut best = root.clone();
    let root_priority = root.priority;
    frontier.push(root, root_priority);

    let mut expanded = 0usize;
    while expanded < config.max_nodes {
        if let Some(deadline) = config.deadline
            && start.elapsed() >= deadline
        {
            break;
        }
        let Some(node) = frontier.pop() else {
            break;
        };
        expanded += 1;

        if node.state.score() > best.state.score() {
            best = node.clone();
        }

        // First dequeue of a fingerprint claims it; later ones are spent
        // budget but grow nothing
        if !visited.insert(fingerprint(&node.state, config.fingerprint)) {
            continue;
        }

        let depth = node.path.len() as u32 + 1;
        let remaining_after = initial_queue_len.saturating_sub(depth);

        for mv in node.state.legal_moves() {
            let Ok(state) = engine.apply_move(&node.state, mv) else {
                continue;
            };
            let mut path = node.path.clone();
            path.push(mv);
            let priority = state.score() + remaining_after;
            frontier.push(
                SearchNode {
                    state,
                    path,
                    priority,
                },
                priority,
            );
        }
    }

    SearchReport {
        best_state: best.state,
        best_moves: best.path,
        nodes_expanded: expanded,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Restrictions};
    use crate::words::{Dictionary, MatchPolicy};

    fn empty_dict() -> Dictionary {
        Dictionary::from_words(std::iter::empty::<&str>())
    }

    fn wordless_grid() -> Grid {
        Grid::parse("qjqjq xvxvx zkzkz bdbdb qxzbj").unwrap()
    }

    #[test]
    fn zero_budget_returns_initial_state() {
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let initial = engine.initial_state(wordless_grid(), b"eat".to_vec());

        let config = SearchConfig {
            max_nodes: 0,
            ..SearchConfig::default()
        };
        let report = best_first_search(&engine, initial.clone(), &config);

        assert_eq!(report.nodes_expanded, 0);
        assert_eq!(report.best_state, initial);
        assert!(report.best_moves.is_empty());
    }

    #[test]
    fn exhausted_initial_state_reports_itself() {
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let initial = engine.initial_state(wordless_grid(), Vec::new());

        let report = best_first_search(&engine, initial.clone(), &SearchConfig::default());
        assert_eq!(report.nodes_expanded, 1);
        assert_eq!(report.best_state, initial);
        assert!(report.best_moves.is_empty());
    }

    #[test]
    fn finds_single_move_word() {
        // Sliding row 2 left feeds 't' after "ea": the only scoring move
        let dictionary = Dictionary::from_words(["eat"]);
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let grid = Grid::parse("qjqjq xvxvx qjqea bdbdb qxzbj").unwrap();
        let initial = engine.initial_state(grid, b"t".to_vec());
        assert_eq!(initial.score(), 0);

        let report = best_first_search(&engine, initial, &SearchConfig::default());

        assert_eq!(report.best_score(), 3);
        assert_eq!(report.best_moves, vec![Move::left(2)]);
        // Root plus its twenty children and nothing more
        assert_eq!(report.nodes_expanded, 21);
    }

    #[test]
    fn equal_scores_keep_the_earliest_dequeued() {
        // Rows 0 and 1 both complete "eat" by sliding left; the row 0
        // child is inserted first, so ties resolve to it
        let dictionary = Dictionary::from_words(["eat"]);
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let grid = Grid::parse("qjqea xvjea zkzkz bdbdb qxzbj").unwrap();
        let initial = engine.initial_state(grid, b"t".to_vec());
        assert_eq!(initial.score(), 0);

        let report = best_first_search(&engine, initial, &SearchConfig::default());

        assert_eq!(report.best_score(), 3);
        assert_eq!(report.best_moves, vec![Move::left(0)]);
    }

    #[test]
    fn budget_counts_every_dequeue() {
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let initial = engine.initial_state(wordless_grid(), b"eat".to_vec());

        let config = SearchConfig {
            max_nodes: 5,
            ..SearchConfig::default()
        };
        let report = best_first_search(&engine, initial, &config);
        assert_eq!(report.nodes_expanded, 5);
    }

    #[test]
    fn duplicate_grids_are_dequeued_but_not_expanded() {
        // Only left(0) and left(1) stay legal; with identical queue
        // letters the two move orders converge on the same grids.
        // Distinct states per depth: 1, 2, 3, then 4 leaves reached by
        // 6 pushes. Every push is dequeued (13 total), but the converged
        // duplicates grow nothing, or depth 3 would add 8 pushes, not 6.
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let mut restrictions = Restrictions::none();
        for index in 0..5 {
            // Locks right on every row, and both directions on every column
            restrictions = restrictions.locking_opposite(Move::left(index));
            restrictions = restrictions.locking_opposite(Move::up(index));
            restrictions = restrictions.locking_opposite(Move::down(index));
        }
        for index in 2..5 {
            restrictions = restrictions.locking_opposite(Move::right(index));
        }
        let initial = GameState::new(
            wordless_grid(),
            b"qqq".to_vec(),
            restrictions,
            Vec::new(),
            0,
            0,
            None,
        );
        assert_eq!(initial.legal_moves(), vec![Move::left(0), Move::left(1)]);

        let report = best_first_search(&engine, initial, &SearchConfig::default());
        assert_eq!(report.nodes_expanded, 13);
        assert_eq!(report.best_score(), 0);
        assert!(report.best_moves.is_empty());
    }

    #[test]
    fn grid_and_queue_scope_expands_the_same_converged_grids() {
        // Converging paths consume the same letters here, so the wider
        // scope dedupes them too and the counts match the grid-only run
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);

        let mut restrictions = Restrictions::none();
        for index in 0..5 {
            restrictions = restrictions.locking_opposite(Move::left(index));
            restrictions = restrictions.locking_opposite(Move::up(index));
            restrictions = restrictions.locking_opposite(Move::down(index));
        }
        for index in 2..5 {
            restrictions = restrictions.locking_opposite(Move::right(index));
        }
        let initial = GameState::new(
            wordless_grid(),
            b"qqq".to_vec(),
            restrictions,
            Vec::new(),
            0,
            0,
            None,
        );

        let config = SearchConfig {
            fingerprint: FingerprintScope::GridAndQueue,
            ..SearchConfig::default()
        };
        let report = best_first_search(&engine, initial, &config);
        assert_eq!(report.nodes_expanded, 13);
    }

    #[test]
    fn zero_deadline_stops_before_any_dequeue() {
        let dictionary = empty_dict();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let initial = engine.initial_state(wordless_grid(), b"eat".to_vec());

        let config = SearchConfig {
            deadline: Some(Duration::ZERO),
            ..SearchConfig::default()
        };
        let report = best_first_search(&engine, initial.clone(), &config);
        assert_eq!(report.nodes_expanded, 0);
        assert_eq!(report.best_state, initial);
    }

    #[test]
    fn best_score_never_below_initial_score() {
        let dictionary = Dictionary::from_words(["tea"]);
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let grid = Grid::parse("teaqj uqjqx bxzkz qzkzb jbdbd").unwrap();
        let initial = engine.initial_state(grid, b"zzz".to_vec());
        let initial_score = initial.score();
        assert_eq!(initial_score, 3);

        for budget in [0, 1, 7, 100] {
            let config = SearchConfig {
                max_nodes: budget,
                ..SearchConfig::default()
            };
            let report = best_first_search(&engine, initial.clone(), &config);
            assert!(report.best_score() >= initial_score);
        }
    }

    #[test]
    fn best_moves_replay_to_best_state() {
        let dictionary = Dictionary::builtin();
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let puzzle = crate::generator::generate(20_240_524, &engine).unwrap();

        let config = SearchConfig {
            max_nodes: 2_000,
            ..SearchConfig::default()
        };
        let report = best_first_search(&engine, puzzle.state.clone(), &config);

        let mut replayed = puzzle.state;
        for &mv in &report.best_moves {
            replayed = engine.apply_move(&replayed, mv).unwrap();
        }
        assert_eq!(replayed, report.best_state);
        assert_eq!(replayed.score(), report.best_score());
    }
}
