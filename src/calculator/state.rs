//! Calculator state and its transitions.
//!
//! The state is a small record driven by discrete inputs. Every transition
//! takes the current state by reference and returns the next one, so the
//! owner only ever holds a single live value.

use super::evaluation::{DEFAULT_SIGNIFICANT_DIGITS, combine, format_result, round_significant};
use serde::Serialize;

/// Text shown after an operation that cannot produce a number.
pub const ERROR_SENTINEL: &str = "Error";

/// A pending or last-applied operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Terminal marker left behind by `=`. Never repeats the last operation.
    Equals,
}

impl Operation {
    /// Symbol shown in the pending expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Equals => '=',
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Equals)
    }
}

/// A discrete user event understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A digit `'0'..='9'`. Any other character is ignored.
    Digit(char),
    DecimalPoint,
    /// An operator key. `Operator(Operation::Equals)` is the same as [`Input::Equals`].
    Operator(Operation),
    Equals,
    Clear,
    Backspace,
}

/// The complete calculator state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Literal text in the display: a numeric literal, `"0"`, or the error sentinel.
    pub display: String,
    /// Left-hand operand captured before the pending operation.
    pub previous_value: Option<f64>,
    /// Pending (or last applied) operation.
    pub operation: Option<Operation>,
    /// The next digit starts a new number instead of extending `display`.
    pub waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// The "previous operand and operator" line shown above the display,
    /// present only while an arithmetic operator is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_value, self.operation) {
            (Some(previous), Some(op)) if !op.is_terminal() => {
                Some(format!("{} {}", format_result(previous), op.symbol()))
            }
            _ => None,
        }
    }

    /// Apply one input, rounding results to the default precision.
    pub fn apply(&self, input: Input) -> Self {
        self.apply_with_precision(input, DEFAULT_SIGNIFICANT_DIGITS)
    }

    /// Apply one input, rounding results to `significant_digits`.
    pub fn apply_with_precision(&self, input: Input, significant_digits: usize) -> Self {
        match input {
            Input::Digit(digit) => self.input_digit(digit),
            Input::DecimalPoint => self.input_decimal(),
            Input::Operator(op) => self.perform_operation(op, significant_digits),
            Input::Equals => self.calculate(significant_digits),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
        }
    }

    pub fn input_digit(&self, digit: char) -> Self {
        if !digit.is_ascii_digit() {
            return self.clone();
        }

        if self.waiting_for_operand {
            return Self {
                display: digit.to_string(),
                waiting_for_operand: false,
                ..self.clone()
            };
        }

        let display = if self.display == "0" {
            digit.to_string()
        } else {
            format!("{}{}", self.display, digit)
        };

        Self {
            display,
            ..self.clone()
        }
    }

    pub fn input_decimal(&self) -> Self {
        if self.waiting_for_operand {
            return Self {
                display: "0.".to_string(),
                waiting_for_operand: false,
                ..self.clone()
            };
        }

        if self.display.contains('.') {
            return self.clone();
        }

        Self {
            display: format!("{}.", self.display),
            ..self.clone()
        }
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Drop the last display character. Only the display is touched.
    pub fn backspace(&self) -> Self {
        let mut display = self.display.clone();

        if self.is_error() || display.chars().count() <= 1 {
            display = "0".to_string();
        } else {
            display.pop();
            // A lone sign is not a number
            if display == "-" {
                display = "0".to_string();
            }
        }

        Self {
            display,
            ..self.clone()
        }
    }

    /// Press an operator key (or `=` via [`calculate`](Self::calculate)).
    pub fn perform_operation(&self, next: Operation, significant_digits: usize) -> Self {
        // Operators do nothing until a digit or Clear leaves the error state
        if self.is_error() {
            return self.clone();
        }
        let Ok(input_value) = self.display.parse::<f64>() else {
            return self.clone();
        };

        let Some(previous) = self.previous_value else {
            return self.start_computation(input_value, next);
        };

        let pending = match self.operation {
            Some(_) if self.waiting_for_operand => {
                return Self {
                    operation: Some(next),
                    ..self.clone()
                };
            }
            Some(op) if !op.is_terminal() => op,
            // A new operand typed after `=` starts over from that operand
            _ => return self.start_computation(input_value, next),
        };

        match combine(previous, input_value, pending) {
            Ok(value) => {
                let value = round_significant(value, significant_digits);
                Self {
                    display: format_result(value),
                    previous_value: Some(value),
                    operation: Some(next),
                    waiting_for_operand: true,
                }
            }
            Err(err) => {
                tracing::debug!(
                    "{} {} {} failed: {}",
                    previous,
                    pending.symbol(),
                    input_value,
                    err
                );
                Self::error()
            }
        }
    }

    /// Press `=`.
    pub fn calculate(&self, significant_digits: usize) -> Self {
        self.perform_operation(Operation::Equals, significant_digits)
    }

    fn start_computation(&self, input_value: f64, next: Operation) -> Self {
        Self {
            previous_value: Some(input_value),
            operation: Some(next),
            waiting_for_operand: true,
            ..self.clone()
        }
    }

    fn error() -> Self {
        Self {
            display: ERROR_SENTINEL.to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: true,
        }
    }
}

/// Owner of the single live calculator state.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    significant_digits: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANT_DIGITS)
    }
}

impl Calculator {
    pub fn new(significant_digits: usize) -> Self {
        Self {
            state: CalculatorState::new(),
            significant_digits,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Replace the live state with the result of applying `input`.
    pub fn handle(&mut self, input: Input) -> &CalculatorState {
        let next = self
            .state
            .apply_with_precision(input, self.significant_digits);
        tracing::trace!(?input, from = ?self.state, to = ?next, "transition");
        self.state = next;
        &self.state
    }

    /// Apply a sequence of inputs in order.
    pub fn handle_all(&mut self, inputs: impl IntoIterator<Item = Input>) -> &CalculatorState {
        for input in inputs {
            self.handle(input);
        }
        &self.state
    }
}
