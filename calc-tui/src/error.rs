//! Error types for calc-tui
//!
//! Wraps calculator core errors and terminal/IO errors for unified
//! error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Calculator core error (config, logging)
    #[error("Core error: {0}")]
    Core(#[from] libcalc::CalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl TuiError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Core(e) => e.exit_code(),
            TuiError::Terminal(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_keeps_exit_code() {
        let error = TuiError::from(libcalc::CalcError::InvalidInput("bad flag".to_string()));
        assert_eq!(error.exit_code(), 3);
        assert_eq!(error.to_string(), "Core error: Invalid input: bad flag");
    }

    #[test]
    fn test_terminal_error_exit_code() {
        let error = TuiError::from(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
        assert_eq!(error.exit_code(), 1);
    }
}
