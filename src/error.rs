//! Error types for selection and boundary operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Buffer has no cells to select ({width}x{height})")]
    EmptyBuffer { width: usize, height: usize },

    #[error("Row {row} is outside the buffer (oldest row {oldest}, height {height})")]
    RowOutOfRange { row: i32, oldest: i32, height: usize },

    #[error("Column {col} is outside the buffer width {width}")]
    ColumnOutOfRange { col: usize, width: usize },

    #[error("Buffer returned no line for row {row}")]
    MissingLine { row: i32 },
}
