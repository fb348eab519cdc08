//! Search-state fingerprints
//!
//! FNV-1a over the board letters, optionally the remaining queue too, so
//! the search can recognize repeated positions without retaining whole
//! states in the visited set.

use crate::core::GameState;

/// What a fingerprint covers
///
/// Hashing the grid alone merges every path that reaches the same board,
/// even when the remaining queues differ, which prunes hardest. Folding
/// the queue in keeps such paths distinct at the cost of a larger search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintScope {
    /// Board letters only
    #[default]
    GridOnly,
    /// Board letters plus the remaining queue
    GridAndQueue,
}

impl FingerprintScope {
    /// Look up a scope by name, falling back to the default
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "grid-queue" | "grid+queue" => Self::GridAndQueue,
            _ => Self::GridOnly,
        }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// 64-bit FNV-1a fingerprint of a state under `scope`
#[must_use]
pub fn fingerprint(state: &GameState, scope: FingerprintScope) -> u64 {
    let mut hash = FNV_OFFSET;
    for row in state.grid().cells() {
        for &letter in row {
            hash = fnv_step(hash, letter);
        }
    }
    if scope == FingerprintScope::GridAndQueue {
        for &letter in state.queue() {
            hash = fnv_step(hash, letter);
        }
    }
    hash
}

#[inline]
const fn fnv_step(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Move};
    use crate::engine::Engine;
    use crate::words::{Dictionary, MatchPolicy};

    fn state_with_queue(queue: &[u8]) -> GameState {
        let dictionary = Dictionary::from_words(std::iter::empty::<&str>());
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let grid = Grid::parse("qjqjq xvxvx zkzkz bdbdb qxzbj").unwrap();
        engine.initial_state(grid, queue.to_vec())
    }

    #[test]
    fn same_grid_same_fingerprint() {
        let a = state_with_queue(b"eat");
        let b = state_with_queue(b"eat");
        assert_eq!(
            fingerprint(&a, FingerprintScope::GridOnly),
            fingerprint(&b, FingerprintScope::GridOnly)
        );
    }

    #[test]
    fn grid_only_ignores_queue() {
        let a = state_with_queue(b"eat");
        let b = state_with_queue(b"tea");
        assert_eq!(
            fingerprint(&a, FingerprintScope::GridOnly),
            fingerprint(&b, FingerprintScope::GridOnly)
        );
    }

    #[test]
    fn grid_and_queue_separates_different_queues() {
        let a = state_with_queue(b"eat");
        let b = state_with_queue(b"tea");
        assert_ne!(
            fingerprint(&a, FingerprintScope::GridAndQueue),
            fingerprint(&b, FingerprintScope::GridAndQueue)
        );
    }

    #[test]
    fn different_grids_differ() {
        let dictionary = Dictionary::from_words(std::iter::empty::<&str>());
        let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
        let a = state_with_queue(b"eat");
        let b = engine.apply_move(&a, Move::left(0)).unwrap();
        assert_ne!(
            fingerprint(&a, FingerprintScope::GridOnly),
            fingerprint(&b, FingerprintScope::GridOnly)
        );
    }

    #[test]
    fn fingerprint_ignores_restrictions_and_move_count() {
        use crate::core::Restrictions;

        let grid = Grid::parse("qjqjq xvxvx zkzkz bdbdb qxzbj").unwrap();
        let a = GameState::new(grid, b"xy".to_vec(), Restrictions::none(), Vec::new(), 0, 0, None);
        let b = GameState::new(
            grid,
            b"xy".to_vec(),
            Restrictions::none().locking_opposite(Move::left(3)),
            Vec::new(),
            0,
            7,
            Some((3, 4)),
        );

        // Same board, different history: both scopes treat them as equal
        assert_eq!(
            fingerprint(&a, FingerprintScope::GridOnly),
            fingerprint(&b, FingerprintScope::GridOnly)
        );
        assert_eq!(
            fingerprint(&a, FingerprintScope::GridAndQueue),
            fingerprint(&b, FingerprintScope::GridAndQueue)
        );
    }

    #[test]
    fn from_name_parses_scopes() {
        assert_eq!(
            FingerprintScope::from_name("grid"),
            FingerprintScope::GridOnly
        );
        assert_eq!(
            FingerprintScope::from_name("grid-queue"),
            FingerprintScope::GridAndQueue
        );
        assert_eq!(
            FingerprintScope::from_name("unknown"),
            FingerprintScope::GridOnly
        );
    }
}
