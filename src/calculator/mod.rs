//! Calculator engine.
//!
//! This module provides:
//! - The calculator state and its input-driven transitions
//! - Arithmetic with rounding of floating point artifacts
//! - Copying results to the clipboard

mod clipboard;
mod evaluation;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::{
    CalcError, DEFAULT_SIGNIFICANT_DIGITS, combine, format_result, round_significant,
};
pub use state::{Calculator, CalculatorState, ERROR_SENTINEL, Input, Operation};
