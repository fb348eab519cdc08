//! Best-first move search
//!
//! Explores move sequences from an initial state, always expanding the most
//! promising frontier node first, under a node budget. The search shares no
//! global state: frontier, visited set and best-so-far all live inside one
//! call, so independent searches can run in parallel.

mod best_first;
mod fingerprint;
mod frontier;

pub use best_first::{SearchConfig, SearchNode, SearchReport, best_first_search};
pub use fingerprint::{FingerprintScope, fingerprint};
pub use frontier::Frontier;
