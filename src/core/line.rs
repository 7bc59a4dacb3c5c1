//! Terminal line representation
//!
//! A line represents a row of cells in the terminal grid, with a flag
//! recording whether the row continues onto the next one.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::cell::Cell;

/// A row of cells in the terminal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The cells in this line
    pub cells: Vec<Cell>,
    /// True if this line was soft-wrapped: the content reached the right
    /// margin and continues on the next row without a newline
    pub wrapped: bool,
}

impl Line {
    /// Create a new blank line with the given number of columns
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
            wrapped: false,
        }
    }

    /// Create a line from existing cells
    pub fn from_cells(cells: Vec<Cell>, wrapped: bool) -> Self {
        Self { cells, wrapped }
    }

    /// Build a line from text, one cell per column.
    ///
    /// Double-width characters take a second continuation cell. Characters
    /// without a column width (controls, combining marks) are dropped.
    pub fn from_text(text: &str, wrapped: bool) -> Self {
        let mut cells = Vec::with_capacity(text.len());
        for c in text.chars() {
            match c.width() {
                Some(2) => {
                    cells.push(Cell::wide(c));
                    cells.push(Cell::continuation());
                },
                Some(1) => cells.push(Cell::new(c)),
                _ => {},
            }
        }
        Self { cells, wrapped }
    }

    /// Get the number of columns in this line
    pub fn cols(&self) -> usize {
        self.cells.len()
    }

    /// Check if this line continues onto the next row
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Resize the line to a new column count
    pub fn resize(&mut self, cols: usize) {
        self.cells.resize(cols, Cell::default());
    }

    /// Check if the line is empty (all cells are empty)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Get the rightmost non-empty column
    pub fn last_non_empty(&self) -> Option<usize> {
        self.cells.iter().rposition(|c| !c.is_empty())
    }

    /// Number of characters in `text()`
    pub fn text_len(&self) -> usize {
        self.last_non_empty().map_or(0, |i| i + 1)
    }

    /// Extract the text of this line.
    ///
    /// Produces exactly one character per cell up to the last non-empty
    /// cell, so character index equals column. Unwritten cells inside the
    /// text become spaces and wide-character continuation cells become
    /// [`WIDE_CHAR_MARKER`](super::cell::WIDE_CHAR_MARKER).
    pub fn text(&self) -> String {
        self.cells[..self.text_len()]
            .iter()
            .map(Cell::display_char)
            .collect()
    }

    /// The character at a column, or a space past the end of the line
    pub fn char_at(&self, col: usize) -> char {
        self.cells.get(col).map_or(' ', Cell::display_char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::WIDE_CHAR_MARKER;

    #[test]
    fn test_line_new() {
        let line = Line::new(80);
        assert_eq!(line.cols(), 80);
        assert!(!line.is_wrapped());
        assert!(line.is_empty());
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_line_resize() {
        let mut line = Line::new(80);
        line.resize(40);
        assert_eq!(line.cols(), 40);
        line.resize(100);
        assert_eq!(line.cols(), 100);
    }

    #[test]
    fn test_line_text_drops_trailing_blanks_only() {
        let mut line = Line::new(10);
        line.cells[0].set_char('H');
        line.cells[3].set_char('i');
        assert_eq!(line.text(), "H  i");
        assert_eq!(line.text_len(), 4);
    }

    #[test]
    fn test_line_text_keeps_explicit_spaces() {
        let line = Line::from_text("ab  ", false);
        assert_eq!(line.text(), "ab  ");
    }

    #[test]
    fn test_line_last_non_empty() {
        let mut line = Line::new(10);
        assert_eq!(line.last_non_empty(), None);
        line.cells[3].set_char('X');
        assert_eq!(line.last_non_empty(), Some(3));
        line.cells[7].set_char('Y');
        assert_eq!(line.last_non_empty(), Some(7));
    }

    #[test]
    fn test_from_text_wide_chars_take_two_cells() {
        let line = Line::from_text("a中b", true);
        assert_eq!(line.cols(), 4);
        assert!(line.is_wrapped());
        assert!(line.cells[1].wide);
        assert!(line.cells[2].is_wide_continuation());
        assert_eq!(line.text(), format!("a中{}b", WIDE_CHAR_MARKER));
    }

    #[test]
    fn test_from_text_skips_zero_width() {
        let line = Line::from_text("e\u{301}\u{7}x", false);
        assert_eq!(line.text(), "ex");
    }

    #[test]
    fn test_char_at() {
        let line = Line::from_text("ab", false);
        assert_eq!(line.char_at(1), 'b');
        assert_eq!(line.char_at(5), ' ');
    }
}
