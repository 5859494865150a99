//! Core value types shared by the evaluator, formatter and reducer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OperandError;

/// One of the four binary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// Symbol shown on the keypad and in the previous-operand line
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    /// Plain ASCII symbol for terminals without unicode support
    pub fn ascii_symbol(&self) -> &'static str {
        match self {
            Operation::Divide => "/",
            other => other.symbol(),
        }
    }

    /// Apply the operation with IEEE-754 semantics (no division guard)
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "subtract" => Ok(Operation::Subtract),
            "*" | "x" | "×" | "multiply" => Ok(Operation::Multiply),
            "/" | "÷" | "divide" => Ok(Operation::Divide),
            _ => Err(format!(
                "Invalid operation: '{}'. Valid options: +, -, *, /, add, subtract, multiply, divide",
                s
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad entry: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// `0` through `9`, indexed by value
    pub const DIGITS: [Digit; 10] = [
        Digit('0'),
        Digit('1'),
        Digit('2'),
        Digit('3'),
        Digit('4'),
        Digit('5'),
        Digit('6'),
        Digit('7'),
        Digit('8'),
        Digit('9'),
    ];

    pub fn new(ch: char) -> Result<Self, OperandError> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Digit(ch))
        } else {
            Err(OperandError::NotASingleDigit(ch.to_string()))
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = OperandError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Digit::new(ch)
    }
}

impl FromStr for Digit {
    type Err = OperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Digit::new(ch),
            _ => Err(OperandError::NotASingleDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric text accumulated one keypress at a time
///
/// Operands typed by the user follow the entry grammar
/// `digits* ('.' digits*)?`, enforced by [`Operand::parse`] and by only
/// ever growing through [`Digit`]s. Evaluation results are the other
/// source of operands: canonical `f64` text such as `-3`, `0.5`,
/// `Infinity` or `NaN`, or the empty operand when there was nothing to
/// compute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Operand(String);

impl Operand {
    /// Parse text against the entry grammar
    pub fn parse(input: &str) -> Result<Self, OperandError> {
        let mut seen_point = false;
        for ch in input.chars() {
            match ch {
                '0'..='9' => {}
                '.' if seen_point => {
                    return Err(OperandError::MultipleDecimalPoints(input.to_string()))
                }
                '.' => seen_point = true,
                _ => {
                    return Err(OperandError::InvalidCharacter {
                        input: input.to_string(),
                        ch,
                    })
                }
            }
        }
        Ok(Operand(input.to_string()))
    }

    /// The empty operand (an evaluation with no numeric result)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap evaluator output; only the evaluator produces these
    pub(crate) fn from_evaluation(text: String) -> Self {
        Operand(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Exactly `"0"`
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    pub(crate) fn push(&mut self, digit: Digit) {
        self.0.push(digit.as_char());
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }
}

impl From<Digit> for Operand {
    fn from(digit: Digit) -> Self {
        Operand(digit.as_char().to_string())
    }
}

impl FromStr for Operand {
    type Err = OperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operand::parse(s)
    }
}

impl AsRef<str> for Operand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
