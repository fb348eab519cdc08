//! Core domain types for Queuedle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are immutable values: transitions build new snapshots and never
//! touch the ones already handed out.

mod grid;
mod highlight;
mod moves;
mod state;

pub use grid::{GRID_SIZE, Grid, GridError};
pub use highlight::Highlight;
pub use moves::{Direction, Move};
pub use state::{GameState, MoveError, Restrictions};
