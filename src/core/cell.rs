//! Terminal Cell
//!
//! Represents a single cell in the terminal grid. Selection only cares about
//! the character in the cell and whether it belongs to a double-width glyph.

use serde::{Deserialize, Serialize};

/// Marker character standing in for the second cell of a double-width glyph
/// in line text. It is a private-use code point and never real text.
pub const WIDE_CHAR_MARKER: char = '\u{E000}';

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell. `None` for cells never written to and
    /// for continuation cells of wide characters.
    pub content: Option<char>,
    /// This cell holds the first half of a double-width character
    pub wide: bool,
    /// This cell is the continuation of a wide character
    pub wide_char_continuation: bool,
}

impl Cell {
    /// Create a new cell with a single character
    pub fn new(c: char) -> Self {
        Self {
            content: Some(c),
            ..Default::default()
        }
    }

    /// Create the leading cell of a double-width character
    pub fn wide(c: char) -> Self {
        Self {
            content: Some(c),
            wide: true,
            wide_char_continuation: false,
        }
    }

    /// Create the placeholder cell that follows a double-width character
    pub fn continuation() -> Self {
        Self {
            content: None,
            wide: false,
            wide_char_continuation: true,
        }
    }

    /// Check if this cell is empty (no content and not part of a wide char)
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && !self.wide_char_continuation
    }

    /// Check if this cell is a wide character placeholder
    /// (the second cell of a double-width character)
    pub fn is_wide_continuation(&self) -> bool {
        self.wide_char_continuation
    }

    /// Set the character, clearing any wide-char state
    pub fn set_char(&mut self, c: char) {
        *self = Self::new(c);
    }

    /// The character this cell contributes to line text
    pub fn display_char(&self) -> char {
        if self.wide_char_continuation {
            WIDE_CHAR_MARKER
        } else {
            self.content.unwrap_or(' ')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.display_char(), ' ');
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('A');
        assert_eq!(cell.content, Some('A'));
        assert!(!cell.is_empty());
        assert_eq!(cell.display_char(), 'A');
    }

    #[test]
    fn test_cell_continuation_renders_marker() {
        let cell = Cell::continuation();
        assert!(!cell.is_empty());
        assert!(cell.is_wide_continuation());
        assert_eq!(cell.display_char(), WIDE_CHAR_MARKER);
    }

    #[test]
    fn test_cell_wide() {
        let cell = Cell::wide('中');
        assert!(cell.wide);
        assert!(!cell.is_wide_continuation());
        assert_eq!(cell.display_char(), '中');
    }

    #[test]
    fn test_set_char_drops_wide_state() {
        let mut cell = Cell::continuation();
        cell.set_char('x');
        assert!(!cell.is_wide_continuation());
        assert_eq!(cell.display_char(), 'x');
    }
}
