//! Word detection and scoring
//!
//! Scans every row and column of a grid for dictionary words of three to
//! five letters and reports their spans as highlights. Detection is pure:
//! same grid, same dictionary, same policy, same answer.

use super::dictionary::{Dictionary, MIN_WORD_LEN};
use crate::core::{GRID_SIZE, Grid, Highlight};

/// Which of a line's overlapping matches get reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Report a span only when no one-cell extension of it is also a word,
    /// so CATS on a line never drags CAT along with it
    #[default]
    Maximal,
    /// Report every matching span, contained ones included
    All,
}

/// Find every dictionary word on the grid
///
/// Rows are scanned first, then columns, each by line index, then span
/// start, then span end. The order is deterministic and presentation
/// layers rely on it when assigning colors.
#[must_use]
pub fn find_words(grid: &Grid, dictionary: &Dictionary, policy: MatchPolicy) -> Vec<Highlight> {
    let mut found = Vec::new();

    for row in 0..GRID_SIZE {
        let line = grid.row(row);
        for (start, end) in line_spans() {
            if !matches(&line, start, end, dictionary, policy) {
                continue;
            }
            found.push(Highlight::Horizontal { row, start, end });
        }
    }

    for col in 0..GRID_SIZE {
        let line = grid.column(col);
        for (start, end) in line_spans() {
            if !matches(&line, start, end, dictionary, policy) {
                continue;
            }
            found.push(Highlight::Vertical { col, start, end });
        }
    }

    found
}

/// Every candidate span of length >= MIN_WORD_LEN, by start then end
fn line_spans() -> impl Iterator<Item = (usize, usize)> {
    (0..=GRID_SIZE - MIN_WORD_LEN)
        .flat_map(|start| (start + MIN_WORD_LEN - 1..GRID_SIZE).map(move |end| (start, end)))
}

fn matches(
    line: &[u8; GRID_SIZE],
    start: usize,
    end: usize,
    dictionary: &Dictionary,
    policy: MatchPolicy,
) -> bool {
    if !dictionary.contains_run(&line[start..=end]) {
        return false;
    }
    match policy {
        MatchPolicy::All => true,
        MatchPolicy::Maximal => {
            let grows_left = start > 0 && dictionary.contains_run(&line[start - 1..=end]);
            let grows_right = end + 1 < GRID_SIZE && dictionary.contains_run(&line[start..=end + 1]);
            !grows_left && !grows_right
        }
    }
}

/// Score of a highlight set: one point per covered letter
#[must_use]
pub fn word_score(highlights: &[Highlight]) -> u32 {
    highlights.iter().map(|h| h.span_len() as u32).sum()
}

/// The words a highlight set spells, upper-cased, in highlight order
#[must_use]
pub fn words_from_highlights(grid: &Grid, highlights: &[Highlight]) -> Vec<String> {
    highlights
        .iter()
        .map(|h| {
            h.cells()
                .iter()
                .map(|&(row, col)| grid.get(row, col).to_ascii_uppercase() as char)
                .collect()
        })
        .collect()
}
