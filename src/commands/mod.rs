//! Command implementations

pub mod benchmark;
pub mod show;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, SeedOutcome, run_benchmark};
pub use show::{ShowConfig, show_puzzle};
pub use solve::{SolveConfig, SolveResult, solve_seed};
