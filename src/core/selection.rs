//! Selection handling for terminal text selection
//!
//! Turns a pair of grid positions into the text a user copies: rows are
//! sliced by column, soft-wrapped rows are joined without a newline and
//! wide-character placeholders are removed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::buffer::TextBuffer;
use super::cell::WIDE_CHAR_MARKER;
use crate::error::SelectionError;

/// A position in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionPoint {
    /// Row index (0-based, negative for scrollback)
    pub row: i32,
    /// Column index (0-based)
    pub col: usize,
}

impl SelectionPoint {
    /// Create a new selection point
    pub fn new(row: i32, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this point is before another point in reading order
    pub fn is_before(&self, other: &SelectionPoint) -> bool {
        if self.row != other.row {
            self.row < other.row
        } else {
            self.col < other.col
        }
    }
}

/// Order two points so the first is not after the second in reading order.
///
/// Points on the same row are ordered by column and otherwise by row. When
/// both points are equal, `a` comes first.
pub fn order_points(a: SelectionPoint, b: SelectionPoint) -> (SelectionPoint, SelectionPoint) {
    let a_first = if a.row == b.row {
        a.col <= b.col
    } else {
        a.row < b.row
    };
    if a_first {
        (a, b)
    } else {
        (b, a)
    }
}

/// Remove wide-character placeholders from extracted text.
///
/// Text that begins with the marker is returned untouched: a row whose first
/// cell is the tail of a wide character from the previous row keeps its
/// placeholders so the caller can realign columns.
pub fn normalize_wide_chars(text: &str) -> String {
    if text.starts_with(WIDE_CHAR_MARKER) {
        return text.to_string();
    }
    text.chars().filter(|&c| c != WIDE_CHAR_MARKER).collect()
}

fn check_dimensions<B: TextBuffer + ?Sized>(buffer: &B) -> Result<(), SelectionError> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(SelectionError::EmptyBuffer {
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    Ok(())
}

pub(crate) fn check_row<B: TextBuffer + ?Sized>(buffer: &B, row: i32) -> Result<(), SelectionError> {
    let oldest = buffer.oldest_row();
    let height = buffer.height();
    if row < oldest || row >= height as i32 {
        return Err(SelectionError::RowOutOfRange {
            row,
            oldest,
            height,
        });
    }
    Ok(())
}

/// Extract the text between two points.
///
/// The end column is exclusive. A start row older than the oldest retained
/// history line is moved to that line first; the points are then re-ordered,
/// since the move can carry the start past the end.
///
/// A newline follows a row's slice when the row is not soft-wrapped and is
/// not the last row, or when the end column lies beyond the row's text.
pub fn selected_text<B: TextBuffer + ?Sized>(
    start: SelectionPoint,
    end: SelectionPoint,
    buffer: &B,
) -> Result<String, SelectionError> {
    check_dimensions(buffer)?;

    let (mut top, bottom) = order_points(start, end);
    let oldest = buffer.oldest_row();
    if top.row < oldest {
        debug!(row = top.row, oldest, "selection start clamped to oldest history line");
        top.row = oldest;
    }
    let (top, bottom) = order_points(top, bottom);
    check_row(buffer, top.row)?;
    check_row(buffer, bottom.row)?;
    trace!(?top, ?bottom, "extracting selection");

    let mut selected = String::new();
    for row in top.row..=bottom.row {
        let line = buffer
            .line(row)
            .ok_or(SelectionError::MissingLine { row })?;
        let text: Vec<char> = line.text().chars().collect();
        let len = text.len();

        let from = if row == top.row { top.col.min(len) } else { 0 };
        let to = if row == bottom.row { bottom.col.min(len) } else { len };
        let from = from.min(to);
        let slice: String = text[from..to].iter().collect();
        selected.push_str(&normalize_wide_chars(&slice));

        if (!line.is_wrapped() && row < bottom.row) || bottom.col > len {
            selected.push('\n');
        }
    }
    Ok(selected)
}

/// Represents a text selection in the terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Start point of the selection (where the mouse was pressed)
    start: SelectionPoint,
    /// End point of the selection (current mouse position)
    end: SelectionPoint,
}

impl Selection {
    /// Create an empty selection anchored at a point
    pub fn new(start: SelectionPoint) -> Self {
        Self { start, end: start }
    }

    /// Create a selection between two points, in drag order
    pub fn between(start: SelectionPoint, end: SelectionPoint) -> Self {
        Self { start, end }
    }

    /// Where the selection was anchored
    pub fn start(&self) -> SelectionPoint {
        self.start
    }

    /// Where the selection currently ends
    pub fn end(&self) -> SelectionPoint {
        self.end
    }

    /// Update the end point of the selection
    pub fn update(&mut self, end: SelectionPoint) {
        self.end = end;
    }

    /// Check if the selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the start and end points in reading order
    pub fn normalized(&self) -> (SelectionPoint, SelectionPoint) {
        order_points(self.start, self.end)
    }

    /// Check if a cell is within the selection. The end column is
    /// exclusive, matching what [`Selection::text`] copies.
    pub fn contains(&self, point: SelectionPoint) -> bool {
        let (start, end) = self.normalized();
        if point.row < start.row || point.row > end.row {
            return false;
        }
        let after_start = point.row > start.row || point.col >= start.col;
        let before_end = point.row < end.row || point.col < end.col;
        after_start && before_end
    }

    /// Get the selected text from a buffer.
    ///
    /// An empty selection copies nothing, not even the newline
    /// [`selected_text`] gives a point past the end of its row. The anchor row
    /// is still checked against the buffer.
    pub fn text<B: TextBuffer + ?Sized>(&self, buffer: &B) -> Result<String, SelectionError> {
        if self.is_empty() {
            check_dimensions(buffer)?;
            check_row(buffer, self.start.row)?;
            return Ok(String::new());
        }
        selected_text(self.start, self.end, buffer)
    }
}
