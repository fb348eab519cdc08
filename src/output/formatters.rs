//! Formatting utilities for terminal output

use crate::core::{Direction, Grid, Highlight, Move};

/// Queue letters shown before the rest is elided
pub const VISIBLE_QUEUE: usize = 5;

/// Arrow glyph for a slide direction
#[must_use]
pub const fn direction_arrow(direction: Direction) -> char {
    match direction {
        Direction::Left => '←',
        Direction::Right => '→',
        Direction::Up => '↑',
        Direction::Down => '↓',
    }
}

/// Format a move as its line plus an arrow, like `row 2 ←`
#[must_use]
pub fn format_move(mv: Move) -> String {
    let line = if mv.direction().is_horizontal() {
        "row"
    } else {
        "col"
    };
    format!("{} {} {}", line, mv.index(), direction_arrow(mv.direction()))
}

/// Format the letter queue with the upcoming window spelled out
#[must_use]
pub fn format_queue(queue: &[u8]) -> String {
    if queue.is_empty() {
        return "(empty)".to_string();
    }

    let visible: Vec<String> = queue
        .iter()
        .take(VISIBLE_QUEUE)
        .map(|&letter| letter.to_ascii_uppercase() as char)
        .map(String::from)
        .collect();
    let shown = visible.join(" ");

    let hidden = queue.len().saturating_sub(VISIBLE_QUEUE);
    if hidden > 0 {
        format!("{shown} + {hidden} more")
    } else {
        shown
    }
}

/// Grid rows as display strings, one per row
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    (0..5)
        .map(|row| {
            grid.row(row)
                .iter()
                .map(|&letter| letter.to_ascii_uppercase() as char)
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Describe a highlighted word with its position, like `CAT (row 0, cols 0-2)`
#[must_use]
pub fn describe_highlight(grid: &Grid, highlight: Highlight) -> String {
    let word: String = highlight
        .cells()
        .into_iter()
        .map(|(row, col)| grid.get(row, col).to_ascii_uppercase() as char)
        .collect();

    match highlight {
        Highlight::Horizontal { row, start, end } => {
            format!("{word} (row {row}, cols {start}-{end})")
        }
        Highlight::Vertical { col, start, end } => {
            format!("{word} (col {col}, rows {start}-{end})")
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
