//! Scrollback buffer implementation
//!
//! The scrollback buffer stores lines that have scrolled off the top of the
//! visible screen. It's implemented as a ring buffer with a configurable
//! maximum size; once full, the oldest line is evicted.

use serde::{Deserialize, Serialize};

use super::line::Line;

/// Ring buffer for scrollback lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scrollback {
    /// The lines in the scrollback buffer
    lines: Vec<Line>,
    /// Index of the oldest line (head of ring buffer)
    head: usize,
    /// Maximum number of lines to store
    capacity: usize,
}

impl Scrollback {
    /// Create a new scrollback buffer with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity.min(1000)), // Don't pre-allocate too much
            head: 0,
            capacity,
        }
    }

    /// Get the number of lines in the scrollback
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the scrollback is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Push a line into the scrollback buffer
    pub fn push(&mut self, line: Line) {
        if self.capacity == 0 {
            return;
        }

        if self.lines.len() < self.capacity {
            self.lines.push(line);
        } else {
            // Full: overwrite the oldest line and advance the head
            self.lines[self.head] = line;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Get a line by index (0 = oldest line in scrollback)
    pub fn get(&self, index: usize) -> Option<&Line> {
        if index >= self.lines.len() {
            return None;
        }
        self.lines.get((self.head + index) % self.lines.len())
    }

    /// Get a line by index from the end (0 = most recent line)
    pub fn get_from_end(&self, index: usize) -> Option<&Line> {
        let len = self.lines.len();
        if index >= len {
            return None;
        }
        self.get(len - 1 - index)
    }
}
