//! Serializable view of the calculator for front-ends.

use super::display::format_display;
use crate::calculator::CalculatorState;
use serde::Serialize;

/// What a front-end needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// Raw display text as held by the engine.
    pub display: String,
    /// The display formatted for presentation (with thousand separators).
    pub formatted: String,
    /// Pending "operand operator" line, if an operator is pending.
    pub expression: Option<String>,
    /// Whether the display shows the error sentinel.
    pub is_error: bool,
    /// Text to copy to the clipboard. None for errors.
    pub clipboard: Option<String>,
}

impl DisplaySnapshot {
    pub fn from_state(state: &CalculatorState, separator: &str) -> Self {
        let is_error = state.is_error();

        Self {
            display: state.display.clone(),
            formatted: format_display(&state.display, separator),
            expression: state.pending_expression(),
            is_error,
            clipboard: (!is_error).then(|| state.display.clone()),
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Input, Operation};

    #[test]
    fn test_snapshot_of_result() {
        let state = CalculatorState::new()
            .apply(Input::Digit('5'))
            .apply(Input::Digit('0'))
            .apply(Input::Digit('0'))
            .apply(Input::Operator(Operation::Multiply))
            .apply(Input::Digit('4'))
            .apply(Input::Equals);

        let snapshot = DisplaySnapshot::from_state(&state, ",");
        assert_eq!(snapshot.display, "2000");
        assert_eq!(snapshot.formatted, "2,000");
        assert_eq!(snapshot.expression, None);
        assert!(!snapshot.is_error);
        assert_eq!(snapshot.clipboard.as_deref(), Some("2000"));
    }

    #[test]
    fn test_snapshot_of_error() {
        let state = CalculatorState::new()
            .apply(Input::Digit('1'))
            .apply(Input::Operator(Operation::Divide))
            .apply(Input::Digit('0'))
            .apply(Input::Equals);

        let snapshot = DisplaySnapshot::from_state(&state, ",");
        assert!(snapshot.is_error);
        assert_eq!(snapshot.formatted, "Error");
        assert_eq!(snapshot.clipboard, None);
    }

    #[test]
    fn test_snapshot_json() {
        let state = CalculatorState::new()
            .apply(Input::Digit('7'))
            .apply(Input::Operator(Operation::Add));

        let json = DisplaySnapshot::from_state(&state, ",").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "7");
        assert_eq!(value["expression"], "7 +");
        assert_eq!(value["is_error"], false);
    }
}
