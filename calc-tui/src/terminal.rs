//! Raw-mode terminal for the keypad
//!
//! The calculator draws on the alternate screen and, when clicking is on,
//! owns the mouse. Both are handed back on exit or panic.

use crate::error::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal the calculator renders into
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode so single keystrokes reach the keypad, alternate screen, and
/// mouse capture if `mouse` is set
pub fn setup_terminal(mouse: bool) -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Follow the `m` toggle without restarting
pub fn set_mouse_capture(terminal: &mut Tui, enabled: bool) -> Result<()> {
    if enabled {
        execute!(terminal.backend_mut(), EnableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    Ok(())
}

/// Undo `setup_terminal`; mouse capture is released whether or not it was on
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    Ok(())
}

/// Leave raw mode and the alternate screen before the panic message prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
