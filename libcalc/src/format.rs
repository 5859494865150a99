//! Operand formatting for display
//!
//! Operands are stored without separators. For display the integer part
//! is grouped in threes with `,` and the fractional part, including an
//! in-progress trailing `.`, is appended verbatim. Nothing is rounded.

use crate::expression::ExpressionState;
use crate::types::{Operand, Operation};

const GROUP_SEPARATOR: char = ',';

/// Which operation symbols to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolStyle {
    /// `÷` for divide
    #[default]
    Unicode,
    /// `/` for divide
    Ascii,
}

impl SymbolStyle {
    pub fn symbol(&self, operation: Operation) -> &'static str {
        match self {
            SymbolStyle::Unicode => operation.symbol(),
            SymbolStyle::Ascii => operation.ascii_symbol(),
        }
    }
}

/// The two lines of the calculator display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    /// Formatted previous operand followed by the pending operation symbol
    pub previous: String,
    /// Formatted current operand
    pub current: String,
}

/// Format an operand for display, or `None` when there is no operand
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let mut formatted = format_integer(integer);
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    Some(formatted)
}

/// [`format_operand`] over a typed operand
pub fn format(operand: Option<&Operand>) -> Option<String> {
    format_operand(operand.map(Operand::as_str))
}

/// Build both display lines from an expression state
pub fn display_lines(state: &ExpressionState, style: SymbolStyle) -> DisplayLines {
    let previous = [
        format(state.previous_operand.as_ref()),
        state.operation.map(|op| style.symbol(op).to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    DisplayLines {
        previous,
        current: format(state.current_operand.as_ref()).unwrap_or_default(),
    }
}

fn format_integer(integer: &str) -> String {
    match integer {
        "Infinity" => return "∞".to_string(),
        "-Infinity" => return "-∞".to_string(),
        _ => {}
    }

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return "NaN".to_string();
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    format!("{}{}", sign, group_thousands(digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
