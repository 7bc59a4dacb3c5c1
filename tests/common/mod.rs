//! Shared helpers for integration tests

use mochi_selection::Screen;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test output. Set `RUST_LOG=mochi_selection=trace`
/// to see scan geometry.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a screen from `(text, wrapped)` rows; rows beyond the screen height
/// scroll into history.
pub fn screen_with(cols: usize, rows: usize, lines: &[(&str, bool)]) -> Screen {
    let mut screen = Screen::new(cols, rows, 1000);
    screen.write_lines(lines.iter().copied());
    screen
}
