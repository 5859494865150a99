//! Pure reducer for expression state transitions
//!
//! `(State, Action) -> State`, with no side effects. The only value that
//! leaves a transition besides the next state is the result of an
//! [`Action::Evaluate`], returned in [`Reduction::evaluated`] so callers
//! can announce it without reading it back out of the state.

use super::actions::Action;
use super::state::ExpressionState;
use crate::evaluator::evaluate_operands;
use crate::types::{Digit, Operand, Operation};

/// Outcome of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Next expression state
    pub state: ExpressionState,

    /// Result computed by an `Evaluate` transition, `None` for every
    /// other transition (including an `Evaluate` that was a no-op)
    pub evaluated: Option<Operand>,
}

impl Reduction {
    fn to(state: ExpressionState) -> Self {
        Self {
            state,
            evaluated: None,
        }
    }
}

/// Apply one action to the expression state
///
/// # Purity Guarantees
///
/// - No I/O, no logging, no shared state
/// - Total: every action is defined for every state
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: ExpressionState, action: Action) -> Reduction {
    match action {
        Action::AddDigit(digit) => Reduction::to(add_digit(state, digit)),
        Action::ChooseOperation(operation) => Reduction::to(choose_operation(state, operation)),
        Action::Clear => Reduction::to(ExpressionState::default()),
        Action::DeleteDigit => Reduction::to(delete_digit(state)),
        Action::Evaluate => evaluate(state),
    }
}

fn add_digit(mut state: ExpressionState, digit: Digit) -> ExpressionState {
    // A fresh entry after a result: 5 * 2 = 10, then 3 gives 3, not 103
    if state.overwrite {
        return ExpressionState {
            current_operand: Some(Operand::from(digit)),
            overwrite: false,
            ..state
        };
    }

    if let Some(current) = &state.current_operand {
        if digit == Digit::ZERO && current.is_zero() {
            return state;
        }
        if digit.is_point() && current.has_decimal_point() {
            return state;
        }
    }

    let mut current = state.current_operand.take().unwrap_or_default();
    current.push(digit);
    state.current_operand = Some(current);
    state
}

fn choose_operation(state: ExpressionState, operation: Operation) -> ExpressionState {
    match (state.previous_operand.is_some(), state.current_operand.is_some()) {
        // Nothing entered yet
        (false, false) => state,

        // Changing the operator before typing the next operand
        (true, false) => ExpressionState {
            operation: Some(operation),
            ..state
        },

        // First operator: the typed operand becomes the left-hand side
        (false, true) => ExpressionState {
            previous_operand: state.current_operand,
            current_operand: None,
            operation: Some(operation),
            ..state
        },

        // Chaining: fold the pending triple left to right
        (true, true) => {
            let folded = match (&state.previous_operand, &state.current_operand, state.operation) {
                (Some(previous), Some(current), Some(pending)) => {
                    evaluate_operands(previous, current, pending)
                }
                _ => Operand::empty(),
            };

            ExpressionState {
                previous_operand: Some(folded),
                current_operand: None,
                operation: Some(operation),
                ..state
            }
        }
    }
}

fn delete_digit(mut state: ExpressionState) -> ExpressionState {
    // The first delete after a result wipes it
    if state.overwrite {
        return ExpressionState {
            current_operand: None,
            overwrite: false,
            ..state
        };
    }

    let Some(mut current) = state.current_operand.take() else {
        return state;
    };
    // Deleting the only character drops the operand; an empty one stays empty
    if current.len() != 1 {
        current.pop();
        state.current_operand = Some(current);
    }
    state
}

fn evaluate(state: ExpressionState) -> Reduction {
    let (Some(previous), Some(operation), Some(current)) = (
        &state.previous_operand,
        state.operation,
        &state.current_operand,
    ) else {
        return Reduction::to(state);
    };

    let result = evaluate_operands(previous, current, operation);

    Reduction {
        state: ExpressionState {
            previous_operand: None,
            current_operand: Some(result.clone()),
            operation: None,
            overwrite: true,
        },
        evaluated: Some(result),
    }
}
