//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::keypad::Button;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (only acted on when mouse is enabled)
    Mouse(MouseEvent),

    /// Periodic tick; clears the pressed-button highlight
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Calculator ===
    /// A keypad button was activated
    Press(Button),
}
