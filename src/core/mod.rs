//! Selection Core Module
//!
//! Platform-independent selection over the terminal screen. This module contains:
//! - Cell and line representation, including wide-character placeholders
//! - Scrollback buffer and the in-memory `Screen`
//! - The `TextBuffer` access trait selection operates on
//! - Selection text extraction and word boundary scanning
//!
//! Every operation is a pure read: the same buffer contents and points always
//! produce the same text and boundaries.

mod boundary;
mod buffer;
mod cell;
mod line;
mod screen;
mod scrollback;
mod selection;
mod separators;

pub use boundary::{next_separator, previous_separator, word_selection};
pub use buffer::TextBuffer;
pub use cell::{Cell, WIDE_CHAR_MARKER};
pub use line::Line;
pub use screen::Screen;
pub use scrollback::Scrollback;
pub use selection::{normalize_wide_chars, order_points, selected_text, Selection, SelectionPoint};
pub use separators::{Separators, DEFAULT_SEPARATORS};
