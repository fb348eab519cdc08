//! Detected word spans
//!
//! A Highlight marks where a dictionary word sits on the grid: a run of
//! cells inside a single row or a single column.

/// One detected word's location on the grid
///
/// `start` and `end` are inclusive cell indices along the line, so a
/// highlight always covers `end - start + 1` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// A word read left-to-right inside one row
    Horizontal { row: usize, start: usize, end: usize },
    /// A word read top-to-bottom inside one column
    Vertical { col: usize, start: usize, end: usize },
}

impl Highlight {
    /// Number of cells the highlight covers
    #[inline]
    #[must_use]
    pub const fn span_len(&self) -> usize {
        match *self {
            Self::Horizontal { start, end, .. } | Self::Vertical { start, end, .. } => {
                end - start + 1
            }
        }
    }

    /// The cells covered, in reading order
    #[must_use]
    pub fn cells(&self) -> Vec<(usize, usize)> {
        match *self {
            Self::Horizontal { row, start, end } => (start..=end).map(|col| (row, col)).collect(),
            Self::Vertical { col, start, end } => (start..=end).map(|row| (row, col)).collect(),
        }
    }

    /// Whether the highlight covers a particular cell
    #[must_use]
    pub const fn contains_cell(&self, row: usize, col: usize) -> bool {
        match *self {
            Self::Horizontal {
                row: r,
                start,
                end,
            } => r == row && start <= col && col <= end,
            Self::Vertical {
                col: c,
                start,
                end,
            } => c == col && start <= row && row <= end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_inclusive() {
        let h = Highlight::Horizontal {
            row: 1,
            start: 0,
            end: 3,
        };
        assert_eq!(h.span_len(), 4);

        let v = Highlight::Vertical {
            col: 2,
            start: 2,
            end: 4,
        };
        assert_eq!(v.span_len(), 3);
    }

    #[test]
    fn cells_in_reading_order() {
        let h = Highlight::Horizontal {
            row: 1,
            start: 2,
            end: 4,
        };
        assert_eq!(h.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let v = Highlight::Vertical {
            col: 0,
            start: 0,
            end: 2,
        };
        assert_eq!(v.cells(), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn contains_cell_checks_line_and_span() {
        let h = Highlight::Horizontal {
            row: 1,
            start: 1,
            end: 3,
        };
        assert!(h.contains_cell(1, 1));
        assert!(h.contains_cell(1, 3));
        assert!(!h.contains_cell(1, 0));
        assert!(!h.contains_cell(1, 4));
        assert!(!h.contains_cell(2, 2));

        let v = Highlight::Vertical {
            col: 3,
            start: 0,
            end: 2,
        };
        assert!(v.contains_cell(0, 3));
        assert!(!v.contains_cell(3, 3));
        assert!(!v.contains_cell(1, 2));
    }
}
