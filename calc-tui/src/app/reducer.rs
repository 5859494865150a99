//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. Terminal side effects (mouse capture, the
//! read-back log line) are left to the event loop; the only thing a
//! transition emits itself is the calculator session's tracing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use libcalc::format_operand;
use ratatui::layout::Rect;

use super::actions::Action;
use super::state::AppState;
use crate::keypad::{button_at, button_for_key, Button};
use crate::layout::AppLayout;

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(mouse) => handle_mouse(state, mouse),
        Action::Tick => AppState {
            pressed: None,
            ..state
        },
        Action::Resize(width, height) => AppState {
            viewport: Rect::new(0, 0, width, height),
            ..state
        },

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => AppState {
            mouse_enabled: !state.mouse_enabled,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        Action::Press(button) => press(state, button),
    }
}

/// Run a keypad button through the calculator session
fn press(state: AppState, button: Button) -> AppState {
    let mut calculator = state.calculator;
    let evaluated = calculator.dispatch(button.action());

    // Only a real evaluation is read back; any other press clears it
    let read_back = if state.config.read_back_enabled {
        evaluated
            .filter(|result| !result.is_empty())
            .and_then(|result| format_operand(Some(result.as_str())))
    } else {
        None
    };

    AppState {
        calculator,
        read_back,
        pressed: Some(button),
        ..state
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Toggle mouse
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleMouse);
        }

        // Hide help; Esc only clears when no overlay is open
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    match button_for_key(&key) {
        Some(button) => reduce(state, Action::Press(button)),
        None => state,
    }
}

/// Handle mouse input: a left click on a keypad button presses it
fn handle_mouse(state: AppState, mouse: MouseEvent) -> AppState {
    if !state.mouse_enabled || state.help_visible {
        return state;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return state;
    }

    let keypad = AppLayout::new(state.viewport).keypad;
    match button_at(keypad, mouse.column, mouse.row) {
        Some(button) => reduce(state, Action::Press(button)),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcalc::{Digit, Operation};

    fn press_all(state: AppState, buttons: &[Button]) -> AppState {
        buttons
            .iter()
            .fold(state, |state, button| reduce(state, Action::Press(*button)))
    }

    fn d(n: usize) -> Button {
        Button::Digit(Digit::DIGITS[n])
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::Press(d(4)));

        // Original state unchanged
        assert!(state_clone.calculator.state().is_empty());

        // New state has the change
        assert_eq!(
            new_state.calculator.state().current_operand.as_ref().unwrap().as_str(),
            "4"
        );
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_press_sets_highlight_and_tick_clears_it() {
        let state = reduce(AppState::new(), Action::Press(d(7)));
        assert_eq!(state.pressed, Some(d(7)));

        let state = reduce(state, Action::Tick);
        assert_eq!(state.pressed, None);
    }

    #[test]
    fn test_evaluation_is_read_back() {
        let state = press_all(
            AppState::new(),
            &[d(1), d(2), d(0), d(0), Button::Operation(Operation::Multiply), d(2), Button::Equals],
        );
        assert_eq!(state.read_back.as_deref(), Some("2,400"));

        // Cleared by the next press, but the session still remembers it
        let state = reduce(state, Action::Press(d(1)));
        assert_eq!(state.read_back, None);
        assert_eq!(
            state.calculator.last_result().map(|r| r.as_str()),
            Some("2400")
        );
    }

    #[test]
    fn test_read_back_disabled() {
        let mut state = AppState::new();
        state.config.read_back_enabled = false;

        let state = press_all(
            state,
            &[d(1), Button::Operation(Operation::Add), d(1), Button::Equals],
        );
        assert_eq!(state.read_back, None);
        assert_eq!(state.calculator.state().current_operand.as_ref().unwrap().as_str(), "2");
    }

    #[test]
    fn test_empty_result_is_not_read_back() {
        let state = press_all(
            AppState::new(),
            &[d(1), Button::Operation(Operation::Add), Button::Digit(Digit::POINT), Button::Equals],
        );
        assert_eq!(state.read_back, None);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let state = reduce(AppState::new(), Action::Resize(80, 24));
        assert_eq!(state.viewport, Rect::new(0, 0, 80, 24));
    }
}
