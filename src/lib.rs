//! Queuedle Solver
//!
//! Solver and interactive player for Queuedle, the sliding-letter word
//! puzzle: queued letters push into a 5x5 grid one slide at a time, every
//! slide permanently locks the opposite direction for its line, and words
//! on the board score their length.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use queuedle_solver::engine::Engine;
//! use queuedle_solver::generator::generate;
//! use queuedle_solver::solver::{SearchConfig, best_first_search};
//! use queuedle_solver::words::{Dictionary, MatchPolicy};
//!
//! let dictionary = Dictionary::builtin();
//! let engine = Engine::new(&dictionary, MatchPolicy::Maximal);
//!
//! let puzzle = generate(20_240_524, &engine).unwrap();
//! let report = best_first_search(&engine, puzzle.state, &SearchConfig::default());
//! println!("Best score: {}", report.best_score());
//! ```

// Core domain types
pub mod core;

// Move application and scoring
pub mod engine;

// Seeded puzzle generation
pub mod generator;

// Search algorithms
pub mod solver;

// Dictionaries and word detection
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
