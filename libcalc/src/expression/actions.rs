//! Actions for the expression reducer

use crate::types::{Digit, Operation};

/// A discrete keypad action
///
/// Each variant carries exactly the payload it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit or decimal point to the current operand
    AddDigit(Digit),

    /// Pick the pending operation, folding any complete triple first
    ChooseOperation(Operation),

    /// Reset to the empty state
    Clear,

    /// Remove the last character of the current operand
    DeleteDigit,

    /// Compute the pending triple into the current operand
    Evaluate,
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddDigit(_) => "add_digit",
            Action::ChooseOperation(_) => "choose_operation",
            Action::Clear => "clear",
            Action::DeleteDigit => "delete_digit",
            Action::Evaluate => "evaluate",
        }
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Action::AddDigit(digit)
    }
}

impl From<Operation> for Action {
    fn from(operation: Operation) -> Self {
        Action::ChooseOperation(operation)
    }
}
