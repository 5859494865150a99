//! Expression state

use crate::types::{Operand, Operation};

/// The calculator's expression model
///
/// Created empty, mutated only through [`reduce`](super::reduce), and
/// reset to empty by [`Action::Clear`](super::Action::Clear).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionState {
    /// Left-hand operand of the pending operation
    pub previous_operand: Option<Operand>,

    /// Operand being typed, or the last result
    pub current_operand: Option<Operand>,

    /// Pending operation; only meaningful alongside `previous_operand`
    pub operation: Option<Operation>,

    /// Next digit replaces `current_operand` instead of extending it.
    /// Set by an evaluation, consumed by the next digit.
    pub overwrite: bool,
}

impl ExpressionState {
    /// Create the empty state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
