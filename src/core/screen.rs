//! Screen model implementation
//!
//! The screen is the visible terminal grid plus the scrollback that lines
//! scroll into. It is the in-memory buffer selections are taken from; the
//! terminal state machine that fills it lives elsewhere.

use serde::{Deserialize, Serialize};

use super::buffer::TextBuffer;
use super::line::Line;
use super::scrollback::Scrollback;
use crate::app::Config;

/// The main screen structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
    /// Visible grid, top row first
    grid: Vec<Line>,
    /// Lines scrolled off the top of the grid
    scrollback: Scrollback,
    /// Grid row the next `write_lines` entry goes to; `rows` once the grid
    /// has filled and writing scrolls
    #[serde(default)]
    cursor_row: usize,
}

impl Screen {
    /// Create a new screen with the given dimensions
    pub fn new(cols: usize, rows: usize, scrollback_capacity: usize) -> Self {
        Self {
            cols,
            rows,
            grid: (0..rows).map(|_| Line::new(cols)).collect(),
            scrollback: Scrollback::new(scrollback_capacity),
            cursor_row: 0,
        }
    }

    /// Create a screen whose scrollback is sized from the configuration
    pub fn from_config(cols: usize, rows: usize, config: &Config) -> Self {
        Self::new(cols, rows, config.scrollback_lines)
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the scrollback buffer
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Get a line by signed row; negative rows read from scrollback
    pub fn get_line(&self, row: i32) -> Option<&Line> {
        if row >= 0 {
            self.grid.get(row as usize)
        } else {
            self.scrollback.get_from_end((-(row + 1)) as usize)
        }
    }

    /// Replace a visible row. The line is resized to the screen width.
    /// Rows outside the grid are ignored.
    pub fn set_line(&mut self, row: usize, mut line: Line) {
        let cols = self.cols;
        if let Some(slot) = self.grid.get_mut(row) {
            line.resize(cols);
            *slot = line;
        }
    }

    /// Scroll the grid up one row and write `line` into the bottom row.
    /// The top row moves into scrollback.
    pub fn push_line(&mut self, mut line: Line) {
        line.resize(self.cols);
        if self.grid.is_empty() {
            self.scrollback.push(line);
            return;
        }
        let top = self.grid.remove(0);
        self.scrollback.push(top);
        self.grid.push(line);
        self.cursor_row = self.rows;
    }

    /// Fill the screen from text lines, scrolling earlier lines into history
    /// once the grid is full. Each entry is `(text, wrapped)`.
    ///
    /// Writing continues below the last row written by a previous call, or
    /// scrolls if a previous `push_line` already filled the grid. Blank
    /// entries occupy a row like any other.
    pub fn write_lines<'a>(&mut self, lines: impl IntoIterator<Item = (&'a str, bool)>) {
        for (text, wrapped) in lines {
            let line = Line::from_text(text, wrapped);
            if self.cursor_row < self.rows {
                self.set_line(self.cursor_row, line);
                self.cursor_row += 1;
            } else {
                self.push_line(line);
            }
        }
    }
}

impl TextBuffer for Screen {
    fn width(&self) -> usize {
        self.cols
    }

    fn height(&self) -> usize {
        self.rows
    }

    fn history_line_count(&self) -> usize {
        self.scrollback.len()
    }

    fn line(&self, row: i32) -> Option<&Line> {
        self.get_line(row)
    }
}
