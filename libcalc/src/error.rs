//! Error types for libcalc
//!
//! The expression reducer itself never fails: malformed action sequences
//! are no-op transitions and a non-numeric operand evaluates to an empty
//! result. The errors here cover the edges around it: building operands
//! and digits from raw text, loading configuration, and logging setup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Operand error: {0}")]
    Operand(#[from] OperandError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalcError::InvalidInput(_) => 3,
            CalcError::Operand(_) => 3,
            CalcError::Config(_) => 1,
            CalcError::Logging(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Violations of the operand entry grammar: `digits* ('.' digits*)?`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperandError {
    #[error("'{ch}' is not a digit or decimal point in operand '{input}'")]
    InvalidCharacter { input: String, ch: char },

    #[error("operand '{0}' has more than one decimal point")]
    MultipleDecimalPoints(String),

    #[error("'{0}' is not a single digit or decimal point")]
    NotASingleDigit(String),
}
