//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use crate::keypad::{button_rects, Button};
use crate::layout::AppLayout;

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = AppLayout::new(area);

    render_display(frame, layout.display, state);
    render_keypad(frame, layout.keypad, state);
    render_status_bar(frame, layout.status, state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Style helper that honours the colors setting
fn styled(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default().add_modifier(style.add_modifier)
    }
}

/// Previous operand with its operation above the current operand
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = state.calculator.display(state.config.symbol_style());

    let text = vec![
        Line::from(Span::styled(
            lines.previous,
            styled(state, Style::default().fg(Color::Gray)),
        )),
        Line::from(Span::styled(
            lines.current,
            styled(state, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        )),
    ];

    let display = Paragraph::new(text)
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title(" calc "));

    frame.render_widget(display, area);
}

fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    let symbols = state.config.symbol_style();

    for (button, rect) in button_rects(area) {
        let base = match button {
            Button::Operation(_) | Button::Equals => Style::default().fg(Color::Cyan),
            Button::Clear | Button::Delete => Style::default().fg(Color::Yellow),
            Button::Digit(_) => Style::default(),
        };
        let style = if state.pressed == Some(button) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        };

        // Vertically center the label inside the border
        let inner_height = rect.height.saturating_sub(2);
        let mut text = vec![Line::from(""); (inner_height.saturating_sub(1) / 2) as usize];
        text.push(Line::from(button.label(symbols)));

        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(styled(state, style))
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(widget, rect);
    }
}

/// Read-back of the last result, or key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.read_back {
        Some(result) => Line::from(vec![
            Span::styled("= ", styled(state, Style::default().fg(Color::Green))),
            Span::styled(
                result.clone(),
                styled(state, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            ),
        ]),
        None => {
            let mouse = if state.mouse_enabled { "on" } else { "off" };
            Line::from(Span::styled(
                format!("F1: Help | m: Mouse ({}) | q: Quit", mouse),
                styled(state, Style::default().fg(Color::Gray)),
            ))
        }
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);
    let divide = state.config.symbol_style().symbol(libcalc::Operation::Divide);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  0-9 .        - Enter digits"),
        Line::from(format!("  + - * /      - Operations (/ is {})", divide)),
        Line::from("  Enter, =     - Evaluate"),
        Line::from("  Backspace    - Delete last digit (DEL)"),
        Line::from("  c, Delete    - Clear all (AC)"),
        Line::from("  Esc          - Close help / clear"),
        Line::from(""),
        Line::from("  F1           - Toggle help"),
        Line::from("  m            - Toggle mouse (click keypad)"),
        Line::from("  q, Ctrl+C    - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(styled(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
