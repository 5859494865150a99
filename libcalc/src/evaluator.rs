//! Arithmetic evaluator
//!
//! Folds a `(previous, operation, current)` triple into a single result.
//! Operands are read with lenient decimal-prefix parsing and combined in
//! `f64`. An operand without a numeric prefix produces the empty result
//! rather than an error, which the reducer shows as "nothing to display".
//! Division by zero is not guarded: it yields `Infinity`, `-Infinity` or
//! `NaN` like any other IEEE-754 operation.

use crate::types::{Operand, Operation};

/// Evaluate two operand texts with the given operation
///
/// Returns the canonical decimal text of the result, or an empty string
/// when either operand is not a number.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_decimal_prefix(previous), parse_decimal_prefix(current))
    else {
        return String::new();
    };

    format_result(operation.apply(lhs, rhs))
}

/// [`evaluate`] over typed operands
pub fn evaluate_operands(previous: &Operand, current: &Operand, operation: Operation) -> Operand {
    Operand::from_evaluation(evaluate(previous.as_str(), current.as_str(), operation))
}

/// Parse the longest numeric prefix of `input`
///
/// Leading whitespace is skipped, an optional sign is honoured, and
/// `Infinity` is recognised. The prefix is `digits ['.' digits]` with at
/// least one mantissa digit, optionally followed by an exponent. Anything
/// after the prefix is ignored. Returns `None` when there is no numeric
/// prefix at all.
pub fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let negative = bytes.first() == Some(&b'-');

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits: "2e" parses as 2
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Canonical decimal text for a computed value
///
/// Integral values have no fractional part, other finite values use the
/// shortest text that round-trips, negative zero prints as `0`, and
/// non-finite values print as `Infinity`, `-Infinity` or `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
