//! TUI testing utilities using Ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use question_review::App;

/// Create a test terminal large enough for the full review screen
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(100, 40)
}

pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Draw the app once and return the screen contents
pub fn render_app(terminal: &mut Terminal<TestBackend>, app: &App) -> String {
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Assert that the rendered screen contains `expected`
pub fn assert_screen_contains(screen: &str, expected: &str) {
    assert!(
        screen.contains(expected),
        "Screen does not contain expected text.\nExpected: {}\nActual:\n{}",
        expected,
        screen
    );
}
