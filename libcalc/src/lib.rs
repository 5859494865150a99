//! libcalc - core of a keypad calculator
//!
//! Interprets discrete keypad actions (digit entry, operator choice,
//! delete, clear, evaluate) into a three-slot expression model and
//! renders it to display text. Front ends dispatch [`Action`]s and draw
//! the resulting [`ExpressionState`].

pub mod calculator;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod format;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use calculator::Calculator;
pub use config::Config;
pub use error::{CalcError, Result};
pub use evaluator::evaluate;
pub use expression::{reduce, Action, ExpressionState, Reduction};
pub use format::{display_lines, format_operand, DisplayLines, SymbolStyle};
pub use types::{Digit, Operand, Operation};
