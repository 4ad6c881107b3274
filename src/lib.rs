//! A keyboard-driven four-function calculator.
//!
//! The [`calculator`] engine holds the state machine, [`input`] maps raw
//! keys to engine inputs, and [`ui`] formats the state for display.

pub mod calculator;
pub mod config;
pub mod input;
pub mod ui;
