//! Keypad buttons, keybindings and hit-testing
//!
//! The keypad is a four-column grid:
//!
//! ```text
//! [   AC   ][DEL][ ÷ ]
//! [ 1 ][ 2 ][ 3 ][ * ]
//! [ 4 ][ 5 ][ 6 ][ + ]
//! [ 7 ][ 8 ][ 9 ][ - ]
//! [ . ][ 0 ][    =   ]
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libcalc::{Action as CalcAction, Digit, Operation, SymbolStyle};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const COLUMNS: u16 = 4;
pub const ROWS: u16 = 5;

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(Digit),
    Operation(Operation),
    Clear,
    Delete,
    Equals,
}

impl Button {
    /// The calculator action this button dispatches
    pub fn action(&self) -> CalcAction {
        match self {
            Button::Digit(digit) => CalcAction::AddDigit(*digit),
            Button::Operation(operation) => CalcAction::ChooseOperation(*operation),
            Button::Clear => CalcAction::Clear,
            Button::Delete => CalcAction::DeleteDigit,
            Button::Equals => CalcAction::Evaluate,
        }
    }

    pub fn label(&self, style: SymbolStyle) -> String {
        match self {
            Button::Digit(digit) => digit.to_string(),
            Button::Operation(operation) => style.symbol(*operation).to_string(),
            Button::Clear => "AC".to_string(),
            Button::Delete => "DEL".to_string(),
            Button::Equals => "=".to_string(),
        }
    }
}

/// A button and the number of columns it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub button: Button,
    pub span: u16,
}

const fn key(button: Button) -> Key {
    Key { button, span: 1 }
}

const fn wide(button: Button) -> Key {
    Key { button, span: 2 }
}

const fn digit(n: usize) -> Key {
    key(Button::Digit(Digit::DIGITS[n]))
}

const fn op(operation: Operation) -> Key {
    key(Button::Operation(operation))
}

/// Keypad rows, top to bottom; every row spans [`COLUMNS`] columns
pub const GRID: [&[Key]; ROWS as usize] = [
    &[wide(Button::Clear), key(Button::Delete), op(Operation::Divide)],
    &[digit(1), digit(2), digit(3), op(Operation::Multiply)],
    &[digit(4), digit(5), digit(6), op(Operation::Add)],
    &[digit(7), digit(8), digit(9), op(Operation::Subtract)],
    &[key(Button::Digit(Digit::POINT)), digit(0), wide(Button::Equals)],
];

/// Map a key press to the keypad button it stands for
pub fn button_for_key(key: &KeyEvent) -> Option<Button> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => {
            Digit::new(ch).ok().map(Button::Digit)
        }
        KeyCode::Char('+') => Some(Button::Operation(Operation::Add)),
        KeyCode::Char('-') => Some(Button::Operation(Operation::Subtract)),
        KeyCode::Char('*') | KeyCode::Char('x') => Some(Button::Operation(Operation::Multiply)),
        KeyCode::Char('/') => Some(Button::Operation(Operation::Divide)),
        KeyCode::Char('=') | KeyCode::Enter => Some(Button::Equals),
        KeyCode::Backspace => Some(Button::Delete),
        KeyCode::Delete | KeyCode::Char('c') | KeyCode::Esc => Some(Button::Clear),
        _ => None,
    }
}

/// Screen rectangle of every button inside the keypad area
pub fn button_rects(area: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, ROWS as u32); ROWS as usize])
        .split(area);

    let mut rects = Vec::new();
    for (row, keys) in rows.iter().zip(GRID.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS as usize])
            .split(*row);

        let mut column = 0usize;
        for key in keys.iter() {
            let first = columns[column];
            let last = columns[column + key.span as usize - 1];
            rects.push((key.button, first.union(last)));
            column += key.span as usize;
        }
    }
    rects
}

/// The button under a screen cell, if any
pub fn button_at(area: Rect, x: u16, y: u16) -> Option<Button> {
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom())
        .map(|(button, _)| button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_fills_the_grid() {
        for row in GRID.iter() {
            let width: u16 = row.iter().map(|k| k.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn test_every_digit_is_on_the_keypad() {
        let buttons: Vec<Button> = GRID.iter().flat_map(|row| row.iter().map(|k| k.button)).collect();
        for digit in Digit::DIGITS.iter().chain(std::iter::once(&Digit::POINT)) {
            assert!(buttons.contains(&Button::Digit(*digit)));
        }
        for operation in Operation::ALL {
            assert!(buttons.contains(&Button::Operation(operation)));
        }
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(Button::Operation(Operation::Divide).label(SymbolStyle::Unicode), "÷");
        assert_eq!(Button::Operation(Operation::Divide).label(SymbolStyle::Ascii), "/");
        assert_eq!(Button::Digit(Digit::POINT).label(SymbolStyle::Unicode), ".");
        assert_eq!(Button::Clear.label(SymbolStyle::Unicode), "AC");
    }

    #[test]
    fn test_button_rects_count() {
        let rects = button_rects(Rect::new(0, 0, 40, 20));
        assert_eq!(rects.len(), 18);
    }
}
