//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Keypad actions are dispatched through the `libcalc::Calculator` session
//! held in the state; this layer adds the terminal concerns around it
//! (help, mouse, read-back).

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
