//! Terminal input for the keypad
//!
//! Key presses, clicks and resizes become app actions. A quiet tick
//! period becomes `Tick`, which clears the pressed-button highlight.

use crate::app::Action;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// Input the event loop cares about
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Mouse input, only delivered while capture is on
    Mouse(MouseEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Nothing happened for one tick period
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Mouse(mouse) => Action::Mouse(mouse),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Blocking poller with a tick timeout
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait up to one tick for input; focus and paste events count as a tick
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Some platforms report key release and repeat as well
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(TuiEvent::Mouse(mouse)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_tick_rate_from_config() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_event_into_action() {
        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert!(matches!(Action::from(TuiEvent::Key(key)), Action::Key(k) if k == key));
        assert!(matches!(Action::from(TuiEvent::Resize(10, 20)), Action::Resize(10, 20)));
        assert!(matches!(Action::from(TuiEvent::Tick), Action::Tick));
    }
}
