//! Screen layout
//!
//! Shared by rendering and mouse hit-testing, so a click lands on the
//! same button that was drawn there.

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the calculator grows, in columns
pub const MAX_WIDTH: u16 = 44;

/// Display panel: border plus previous and current lines
const DISPLAY_HEIGHT: u16 = 4;

/// Status bar: border plus one line
const STATUS_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [column] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Max(MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        let [display, keypad, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .areas(column);

        Self {
            display,
            keypad,
            status,
        }
    }
}
