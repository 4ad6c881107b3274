//! Arithmetic for the calculator engine.
//!
//! Combines two operands with a pending operation and rounds the result
//! so binary floating-point artifacts never reach the display.

use super::state::Operation;
use thiserror::Error;

/// Number of significant digits results are rounded to before display.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;

/// Failure while combining two operands.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    Overflow,

    #[error("'{0}' is not an arithmetic operation")]
    NotArithmetic(char),
}

/// Apply `op` to the operands `a` and `b`.
///
/// The terminal `Equals` marker carries no arithmetic and is rejected.
pub fn combine(a: f64, b: f64, op: Operation) -> Result<f64, CalcError> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operation::Equals => return Err(CalcError::NotArithmetic(op.symbol())),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Round `value` to `digits` significant decimal digits.
///
/// Goes through the exponent notation text form so that the result is the
/// nearest `f64` to the rounded decimal, e.g. `0.1 + 0.2` becomes `0.3`.
/// A value exactly halfway between two candidates rounds away from zero.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let digits = digits.clamp(1, 17);
    if let Some(rounded) = round_tie_away_from_zero(value, digits) {
        return rounded;
    }

    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Digits needed to print any `f64` exactly in exponent notation.
const EXACT_PRECISION: usize = 800;

/// If the exact decimal expansion of `value` is a tie at `digits`
/// significant digits, round it away from zero. Returns `None` otherwise.
fn round_tie_away_from_zero(value: f64, digits: usize) -> Option<f64> {
    let exact = format!("{:.*e}", EXACT_PRECISION, value.abs());
    let (mantissa, exponent) = exact.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let significand: String = mantissa.chars().filter(|c| *c != '.').collect();

    let (kept, rest) = significand.split_at(digits);
    let mut rest = rest.chars();
    if rest.next() != Some('5') || !rest.all(|c| c == '0') {
        return None;
    }

    let bumped = kept.parse::<u64>().ok()? + 1;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let scale = exponent - (digits as i32 - 1);
    format!("{}{}e{}", sign, bumped, scale).parse().ok()
}

/// Format a computed value as display text.
///
/// Uses the shortest representation that parses back to the same value.
/// Negative zero is shown as `0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
