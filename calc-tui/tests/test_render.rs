//! Test rendering into an in-memory terminal

use calc_tui::app::{reduce, Action, AppState};
use calc_tui::keypad::Button;
use calc_tui::ui;
use libcalc::{Digit, Operation};
use ratatui::{backend::TestBackend, Terminal};

fn render_to_string(state: &AppState) -> String {
    let backend = TestBackend::new(44, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn press_all(state: AppState, buttons: &[Button]) -> AppState {
    buttons
        .iter()
        .fold(state, |state, button| reduce(state, Action::Press(*button)))
}

fn d(n: usize) -> Button {
    Button::Digit(Digit::DIGITS[n])
}

#[test]
fn test_display_shows_formatted_operands() {
    let state = press_all(
        AppState::new(),
        &[d(1), d(2), d(3), d(4), Button::Operation(Operation::Divide), d(5), Button::Digit(Digit::POINT)],
    );

    let screen = render_to_string(&state);
    assert!(screen.contains("1,234 ÷"), "{}", screen);
    assert!(screen.contains("5."), "{}", screen);
}

#[test]
fn test_keypad_labels_are_drawn() {
    let screen = render_to_string(&AppState::new());

    for label in ["AC", "DEL", "÷", "*", "+", "-", "="] {
        assert!(screen.contains(label), "missing {} in\n{}", label, screen);
    }
}

#[test]
fn test_status_bar_reads_back_result() {
    let state = press_all(
        AppState::new(),
        &[d(5), Button::Operation(Operation::Add), d(3), Button::Equals],
    );

    let screen = render_to_string(&state);
    assert!(screen.contains("= 8"), "{}", screen);
}

#[test]
fn test_help_overlay() {
    let state = reduce(AppState::new(), Action::ShowHelp);

    let screen = render_to_string(&state);
    assert!(screen.contains("Keyboard Shortcuts"), "{}", screen);
}
