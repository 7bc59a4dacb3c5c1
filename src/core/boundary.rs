//! Word boundary scanning
//!
//! Walks cell by cell from a position to the nearest separator, following
//! rows across soft wraps and into scrollback. Used to expand a double-click
//! into a word selection.

use tracing::{debug, trace};

use super::buffer::TextBuffer;
use super::selection::{check_row, Selection, SelectionPoint};
use super::separators::Separators;
use crate::error::SelectionError;

/// Validate a scan start and return `(width, height)`
fn check_start<B: TextBuffer + ?Sized>(
    point: SelectionPoint,
    buffer: &B,
) -> Result<(usize, usize), SelectionError> {
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return Err(SelectionError::EmptyBuffer { width, height });
    }
    check_row(buffer, point.row)?;
    if point.col >= width {
        return Err(SelectionError::ColumnOutOfRange {
            col: point.col,
            width,
        });
    }
    Ok((width, height))
}

fn row_text<B: TextBuffer + ?Sized>(buffer: &B, row: i32) -> Result<Vec<char>, SelectionError> {
    buffer
        .line(row)
        .map(|line| line.text().chars().collect())
        .ok_or(SelectionError::MissingLine { row })
}

fn starts_on_separator<B: TextBuffer + ?Sized>(
    point: SelectionPoint,
    buffer: &B,
    separators: &Separators,
) -> Result<bool, SelectionError> {
    let c = buffer
        .char_at(point.col, point.row)
        .ok_or(SelectionError::MissingLine { row: point.row })?;
    Ok(separators.contains(c))
}

/// Find the start of the word containing `point`.
///
/// Scans left until a separator, continuing on the previous row (history
/// included) from its last column. The result is the column just after the
/// separator, moved to the start of the next row when that column is past
/// the right margin. If the oldest history line is exhausted, column 0 of
/// that line is returned. A point already on a separator is returned as is.
///
/// The scan also stops where a row's text ends, so a previous row that does
/// not reach the right margin acts as a boundary.
pub fn previous_separator<B: TextBuffer + ?Sized>(
    point: SelectionPoint,
    buffer: &B,
    separators: &Separators,
) -> Result<SelectionPoint, SelectionError> {
    let (width, height) = check_start(point, buffer)?;
    if starts_on_separator(point, buffer, separators)? {
        return Ok(point);
    }

    let oldest = buffer.oldest_row();
    let mut row = point.row;
    let mut col = point.col as isize;
    let mut text = row_text(buffer, row)?;

    while (col as usize) < text.len() && !separators.contains(text[col as usize]) {
        col -= 1;
        if col < 0 {
            if row <= oldest {
                debug!(row, "word scan reached the oldest history line");
                return Ok(SelectionPoint::new(row, 0));
            }
            row -= 1;
            col = width as isize - 1;
            text = row_text(buffer, row)?;
        }
    }

    col += 1;
    if col as usize >= width {
        if row + 1 < height as i32 {
            row += 1;
            col = 0;
        } else {
            col = width as isize - 1;
        }
    }

    let found = SelectionPoint::new(row, col as usize);
    trace!(?point, ?found, "previous separator");
    Ok(found)
}

/// Find the end of the word containing `point`.
///
/// Scans right until a separator, continuing on the next row from column 0.
/// The result is the column just before the separator, moved to the last
/// column of the previous row when that falls before column 0. If the last
/// screen row is exhausted, the bottom-right cell is returned. A point already
/// on a separator is returned as is.
///
/// The scan also stops where a row's text ends, in which case the result is
/// the last character of that text.
pub fn next_separator<B: TextBuffer + ?Sized>(
    point: SelectionPoint,
    buffer: &B,
    separators: &Separators,
) -> Result<SelectionPoint, SelectionError> {
    let (width, height) = check_start(point, buffer)?;
    if starts_on_separator(point, buffer, separators)? {
        return Ok(point);
    }

    let oldest = buffer.oldest_row();
    let last_row = height as i32 - 1;
    let mut row = point.row;
    let mut col = point.col as isize;
    let mut text = row_text(buffer, row)?;

    while (col as usize) < text.len() && !separators.contains(text[col as usize]) {
        col += 1;
        if col as usize >= width {
            if row >= last_row {
                debug!(row, "word scan reached the bottom of the screen");
                return Ok(SelectionPoint::new(last_row, width - 1));
            }
            row += 1;
            col = 0;
            text = row_text(buffer, row)?;
        }
    }

    col -= 1;
    if col < 0 {
        if row > oldest {
            row -= 1;
            col = width as isize - 1;
        } else {
            col = 0;
        }
    }

    let found = SelectionPoint::new(row, col as usize);
    trace!(?point, ?found, "next separator");
    Ok(found)
}

/// Expand a point into the selection of the word under it.
///
/// The end is one column past [`next_separator`] so that
/// [`Selection::text`], whose end column is exclusive, copies the whole word.
/// It may therefore equal the buffer width.
///
/// A point on a separator or past the end of its row's text is not in a word
/// and gives an empty selection anchored at the point.
pub fn word_selection<B: TextBuffer + ?Sized>(
    point: SelectionPoint,
    buffer: &B,
    separators: &Separators,
) -> Result<Selection, SelectionError> {
    check_start(point, buffer)?;
    let in_word = row_text(buffer, point.row)?
        .get(point.col)
        .is_some_and(|&c| !separators.contains(c));
    if !in_word {
        trace!(?point, "no word under point");
        return Ok(Selection::new(point));
    }

    let start = previous_separator(point, buffer, separators)?;
    let end = next_separator(point, buffer, separators)?;
    Ok(Selection::between(start, SelectionPoint::new(end.row, end.col + 1)))
}
