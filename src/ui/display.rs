//! Display formatting.
//!
//! Turns the engine's display text into what the user sees. Formatting is
//! presentation only and never feeds back into the calculator state.

use crate::calculator::{CalculatorState, ERROR_SENTINEL};

/// Format display text for presentation.
///
/// Whole numbers with a magnitude of at least 1000 get thousand separators;
/// everything else, including the error sentinel and any literal with a
/// decimal point, passes through unchanged.
pub fn format_display(display: &str, separator: &str) -> String {
    if display == ERROR_SENTINEL || display.contains('.') {
        return display.to_string();
    }

    match display.parse::<f64>() {
        Ok(value) if value.abs() >= 1000.0 => group_digits(display, separator),
        _ => display.to_string(),
    }
}

/// Insert `separator` every three digits of an integer literal.
///
/// Works on the text itself so long digit runs are never rounded.
fn group_digits(literal: &str, separator: &str) -> String {
    let (sign, digits) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str(&separator.chars().rev().collect::<String>());
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

/// Render the calculator as a two-line text panel of `width` columns:
/// the pending expression on top and the display right-aligned below.
pub fn render_screen(state: &CalculatorState, separator: &str, width: usize) -> String {
    let expression = state.pending_expression().unwrap_or_default();
    let display = format_display(&state.display, separator);

    format!("{:>width$}\n{:>width$}", expression, display, width = width)
}
