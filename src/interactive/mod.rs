//! Interactive TUI play mode
//!
//! Terminal interface for playing a puzzle by hand, with undo and
//! search-backed hints.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
