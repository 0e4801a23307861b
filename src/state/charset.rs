//! Charset Module - Character-class policy
//!
//! Pure, total helpers that decide what a field accepts:
//!
//! - `classify(c, class)` - single character test
//! - `filter(s, class)` - drop every character outside the class
//! - `has_valid_characters(s, class)` - anchored single-character check used
//!   for key presses and for the paste fast path
//! - `is_paste_whitespace(c)` - characters stripped from pasted text

use crate::types::CharacterClass;

/// Whether `c` is allowed by `class`.
pub fn classify(c: char, class: CharacterClass) -> bool {
    match class.alphabet() {
        None => true,
        Some(alphabet) => alphabet.contains_char(c),
    }
}

/// Remove every character not allowed by `class`, preserving order.
pub fn filter(value: &str, class: CharacterClass) -> String {
    match class.alphabet() {
        None => value.to_string(),
        Some(alphabet) => value.chars().filter(|&c| alphabet.contains_char(c)).collect(),
    }
}

/// Whether `value` is exactly one character allowed by `class`.
///
/// Unrestricted accepts any string. For a restricted class a string of two or
/// more characters never validates, even if each character would. Paste relies
/// on this: multi-character pastes into a restricted passcode always go
/// through [`filter`].
pub fn has_valid_characters(value: &str, class: CharacterClass) -> bool {
    if !class.is_restricted() {
        return true;
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => classify(c, class),
        _ => false,
    }
}

/// Whether paste stripping removes `c`.
///
/// This is the browser `\s` set: ASCII tab, line feed, vertical tab, form
/// feed, carriage return and space, the Unicode space separators, the line
/// and paragraph separators, and the byte-order mark. U+0085 (next line) is
/// kept even though Unicode calls it whitespace.
pub fn is_paste_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// =============================================================================
// Tests
// =============================================================================
