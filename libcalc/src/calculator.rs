//! Calculator session
//!
//! Owns the single [`ExpressionState`] of a session and is its only
//! writer. Front ends dispatch actions here and read the state back
//! between actions.

use tracing::{debug, info};

use crate::expression::{reduce, Action, ExpressionState};
use crate::format::{display_lines, DisplayLines, SymbolStyle};
use crate::types::Operand;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    state: ExpressionState,
    last_result: Option<Operand>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state
    pub fn with_state(state: ExpressionState) -> Self {
        Self {
            state,
            last_result: None,
        }
    }

    /// Apply one action and return the evaluated result, if any
    pub fn dispatch(&mut self, action: Action) -> Option<Operand> {
        let reduction = reduce(self.state.clone(), action);

        if reduction.state == self.state {
            debug!(action = action.name(), "no-op transition");
        } else {
            debug!(action = action.name(), state = ?reduction.state, "transition");
        }

        self.state = reduction.state;
        if let Some(result) = &reduction.evaluated {
            info!(result = %result, "evaluated");
            self.last_result = Some(result.clone());
        }
        reduction.evaluated
    }

    /// Apply a sequence of actions, returning the last evaluated result
    pub fn dispatch_all<I>(&mut self, actions: I) -> Option<Operand>
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(None, |last, action| self.dispatch(action).or(last))
    }

    pub fn state(&self) -> &ExpressionState {
        &self.state
    }

    /// Most recent evaluation result of this session
    pub fn last_result(&self) -> Option<&Operand> {
        self.last_result.as_ref()
    }

    pub fn display(&self, style: SymbolStyle) -> DisplayLines {
        display_lines(&self.state, style)
    }

    /// Back to the empty state, forgetting the last result
    pub fn reset(&mut self) {
        debug!("calculator reset");
        *self = Self::default();
    }
}
