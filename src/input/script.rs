//! Key script parsing.
//!
//! A key script is plain text where every character is one key press and
//! named keys are written in angle brackets, e.g. `12+3<Enter>`.

use super::Key;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches either a `<Name>` token or any single character.
    static ref KEY_TOKEN: Regex = Regex::new(r"(?s)<([A-Za-z][A-Za-z0-9_]*)>|.").unwrap();
}

/// Parse a key script into key presses.
pub fn parse_keys(script: &str) -> Vec<Key> {
    KEY_TOKEN
        .captures_iter(script)
        .filter_map(|caps| match caps.get(1) {
            Some(name) => Some(named_key(name.as_str())),
            None => caps.get(0)?.as_str().chars().next().map(Key::Char),
        })
        .collect()
}

fn named_key(name: &str) -> Key {
    match name.to_ascii_lowercase().as_str() {
        "enter" | "return" | "cr" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        "bs" | "backspace" => Key::Backspace,
        _ => Key::Named(name.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        assert_eq!(
            parse_keys("1+2="),
            vec![Key::Char('1'), Key::Char('+'), Key::Char('2'), Key::Char('=')]
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            parse_keys("9<BS><Enter><esc>"),
            vec![Key::Char('9'), Key::Backspace, Key::Enter, Key::Escape]
        );
        assert_eq!(parse_keys("<F5>"), vec![Key::Named("F5".to_string())]);
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        assert_eq!(
            parse_keys("<1"),
            vec![Key::Char('<'), Key::Char('1')]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_keys("").is_empty());
    }
}
