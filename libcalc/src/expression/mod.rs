//! Expression state machine
//!
//! - Actions: the five keypad intents
//! - State: the `(previous, operation, current, overwrite)` model
//! - Reducer: pure function `(State, Action) -> State`, plus the value
//!   produced by an evaluation
//!
//! Every action is defined over every state. Combinations that make no
//! sense are explicit no-ops, never errors.

pub mod actions;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use reducer::{reduce, Reduction};
pub use state::ExpressionState;
