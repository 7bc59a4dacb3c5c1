//! Buffer access contract
//!
//! Selection and boundary scanning read lines through this trait rather than
//! a concrete grid, so any screen model holding [`Line`]s can be selected from.

use super::line::Line;

/// Read access to a terminal screen plus its scrollback.
///
/// Rows are addressed with signed indices: `0..height()` are the visible
/// rows, `-1` is the most recent history line and `-history_line_count()` the
/// oldest one.
///
/// Implementations are not locked by this crate. Callers must keep the buffer
/// unchanged for the duration of a single extraction or scan.
pub trait TextBuffer {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of visible rows
    fn height(&self) -> usize;

    /// Number of lines currently retained in history
    fn history_line_count(&self) -> usize;

    /// The line at `row`. Only called with rows in
    /// `-history_line_count()..height()`.
    fn line(&self, row: i32) -> Option<&Line>;

    /// The character in a single cell, as it appears in [`Line::text`]
    fn char_at(&self, col: usize, row: i32) -> Option<char> {
        self.line(row).map(|line| line.char_at(col))
    }

    /// Row index of the oldest retained history line
    fn oldest_row(&self) -> i32 {
        -(self.history_line_count() as i32)
    }
}
