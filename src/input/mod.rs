//! Input dispatcher.
//!
//! Translates raw keys into calculator inputs. Keys come either from a
//! front-end event loop or from a textual key script (see [`parse_keys`]).

mod script;

pub use script::parse_keys;

use crate::calculator::{Input, Operation};

/// A raw key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Escape,
    Backspace,
    /// Any other named key (arrows, function keys, ...).
    Named(String),
}

/// Result of dispatching a single key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The calculator input the key maps to, if any.
    pub input: Option<Input>,
    /// The front-end must suppress the platform's default action for this key.
    pub prevent_default: bool,
}

impl Dispatch {
    fn handled(input: Input) -> Self {
        Self {
            input: Some(input),
            prevent_default: false,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

/// Map a key to the calculator input it triggers.
pub fn dispatch(key: &Key) -> Dispatch {
    match key {
        Key::Char(c @ '0'..='9') => Dispatch::handled(Input::Digit(*c)),
        Key::Char('.') => Dispatch::handled(Input::DecimalPoint),
        Key::Char('+') => Dispatch::handled(Input::Operator(Operation::Add)),
        Key::Char('-') => Dispatch::handled(Input::Operator(Operation::Subtract)),
        Key::Char('*') => Dispatch::handled(Input::Operator(Operation::Multiply)),
        // '/' opens quick find in some hosts
        Key::Char('/') => Dispatch {
            input: Some(Input::Operator(Operation::Divide)),
            prevent_default: true,
        },
        Key::Enter | Key::Char('=') => Dispatch::handled(Input::Equals),
        Key::Escape | Key::Char('c') | Key::Char('C') => Dispatch::handled(Input::Clear),
        Key::Backspace => Dispatch::handled(Input::Backspace),
        Key::Char(_) | Key::Named(_) => Dispatch::ignored(),
    }
}

/// Map a sequence of keys to calculator inputs, dropping unmapped keys.
pub fn dispatch_all<'a>(keys: impl IntoIterator<Item = &'a Key>) -> Vec<Input> {
    keys.into_iter()
        .filter_map(|key| {
            let dispatched = dispatch(key);
            if dispatched.input.is_none() {
                tracing::debug!(?key, "ignoring unmapped key");
            }
            dispatched.input
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_decimal() {
        for c in '0'..='9' {
            assert_eq!(dispatch(&Key::Char(c)).input, Some(Input::Digit(c)));
        }
        assert_eq!(dispatch(&Key::Char('.')).input, Some(Input::DecimalPoint));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            dispatch(&Key::Char('+')).input,
            Some(Input::Operator(Operation::Add))
        );
        assert_eq!(
            dispatch(&Key::Char('-')).input,
            Some(Input::Operator(Operation::Subtract))
        );
        assert_eq!(
            dispatch(&Key::Char('*')).input,
            Some(Input::Operator(Operation::Multiply))
        );
        assert_eq!(
            dispatch(&Key::Char('/')).input,
            Some(Input::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_only_divide_prevents_default() {
        assert!(dispatch(&Key::Char('/')).prevent_default);
        assert!(!dispatch(&Key::Char('*')).prevent_default);
        assert!(!dispatch(&Key::Enter).prevent_default);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(dispatch(&Key::Enter).input, Some(Input::Equals));
        assert_eq!(dispatch(&Key::Char('=')).input, Some(Input::Equals));
        assert_eq!(dispatch(&Key::Escape).input, Some(Input::Clear));
        assert_eq!(dispatch(&Key::Char('c')).input, Some(Input::Clear));
        assert_eq!(dispatch(&Key::Char('C')).input, Some(Input::Clear));
        assert_eq!(dispatch(&Key::Backspace).input, Some(Input::Backspace));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(dispatch(&Key::Char('x')), Dispatch::default());
        assert_eq!(dispatch(&Key::Char(' ')), Dispatch::default());
        assert_eq!(dispatch(&Key::Named("Tab".into())), Dispatch::default());
    }

    #[test]
    fn test_dispatch_all_drops_unmapped() {
        let keys = [Key::Char('1'), Key::Char('x'), Key::Char('+'), Key::Enter];
        assert_eq!(
            dispatch_all(&keys),
            vec![
                Input::Digit('1'),
                Input::Operator(Operation::Add),
                Input::Equals
            ]
        );
    }
}
