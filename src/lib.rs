//! Mochi Selection Library
//!
//! Selection text extraction and word-boundary scanning for the Mochi
//! terminal's screen and scrollback. This crate provides:
//!
//! - `core`: Cells, lines, scrollback, the reference `Screen` buffer, the
//!   `TextBuffer` access trait, selection extraction and boundary scanning
//! - `app`: Configuration (scrollback size, word separators)
//! - `error`: Errors returned by selection and scan operations
//!
//! Every operation is a synchronous read against a `TextBuffer`. Callers
//! sharing a buffer with a renderer or PTY reader must hold their read lock
//! for the whole call: a scan issues many line reads against what it assumes
//! is a single snapshot.

pub mod app;
pub mod core;
pub mod error;

pub use crate::app::Config;
pub use crate::core::{
    next_separator, normalize_wide_chars, order_points, previous_separator, selected_text,
    word_selection, Cell, Line, Screen, Scrollback, Selection, SelectionPoint, Separators,
    TextBuffer, WIDE_CHAR_MARKER,
};
pub use crate::error::SelectionError;
