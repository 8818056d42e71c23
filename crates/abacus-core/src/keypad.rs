//! # Keypad
//!
//! Button layout and the scanner that turns typed text into key presses.
//!
//! ## Layout
//! ```text
//! ┌──────┬──────┬──────┬──────┐
//! │  AC  │ +/-  │  %   │  ÷   │
//! ├──────┼──────┼──────┼──────┤
//! │  7   │  8   │  9   │  ×   │
//! ├──────┼──────┼──────┼──────┤
//! │  4   │  5   │  6   │  -   │
//! ├──────┼──────┼──────┼──────┤
//! │  1   │  2   │  3   │  +   │
//! ├──────┴──────┼──────┼──────┤
//! │      0      │  .   │  =   │
//! └─────────────┴──────┴──────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{Key, Operator};

/// Keypad rows, top to bottom. `0` spans two columns (see [`Key::is_wide`]).
pub const KEYPAD: [&[Key]; 5] = [
    &[
        Key::Clear,
        Key::Negate,
        Key::Percent,
        Key::Operator(Operator::Divide),
    ],
    &[
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Multiply),
    ],
    &[
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Subtract),
    ],
    &[
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Add),
    ],
    &[Key::Digit(0), Key::Decimal, Key::Equals],
];

/// Labels longer than one character. Matched before single characters so
/// that `+/-` is not read as `+`, `/`, `-`.
const MULTI_CHAR_LABELS: [&str; 4] = ["+/-", "AC", "ac", "neg"];

/// Scans a line of text into key presses.
///
/// Whitespace separates nothing and is skipped, so `"12+3="` and
/// `"1 2 + 3 ="` produce the same keys. The longest label wins at each
/// position.
///
/// ## Errors
/// `CoreError::UnknownKey` with the offending character and its character
/// index. No keys are returned on error, so a bad line is never half
/// applied.
///
/// ## Example
/// ```rust
/// use abacus_core::keypad::scan;
/// use abacus_core::{Key, Operator};
///
/// let keys = scan("7 +/- ×2=").unwrap();
/// assert_eq!(
///     keys,
///     vec![
///         Key::Digit(7),
///         Key::Negate,
///         Key::Operator(Operator::Multiply),
///         Key::Digit(2),
///         Key::Equals,
///     ]
/// );
/// ```
pub fn scan(line: &str) -> CoreResult<Vec<Key>> {
    let mut keys = Vec::new();
    let mut rest = line;
    let mut position = 0;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            position += 1;
            continue;
        }

        if let Some(label) = MULTI_CHAR_LABELS.iter().find(|l| rest.starts_with(**l)) {
            let key = Key::from_label(label).ok_or_else(|| CoreError::UnknownKey {
                label: label.to_string(),
                position,
            })?;
            keys.push(key);
            rest = &rest[label.len()..];
            position += label.chars().count();
            continue;
        }

        let label = &rest[..c.len_utf8()];
        let key = Key::from_label(label).ok_or_else(|| CoreError::UnknownKey {
            label: label.to_string(),
            position,
        })?;
        keys.push(key);
        rest = &rest[c.len_utf8()..];
        position += 1;
    }

    Ok(keys)
}

/// Renders the keypad as text, one row per line.
///
/// Wide keys take a double cell so columns stay aligned.
pub fn render_layout() -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|key| {
                    if key.is_wide() {
                        format!("[{:^11}]", key.label())
                    } else {
                        format!("[{:^5}]", key.label())
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_layout_covers_every_key_once() {
        let laid_out: Vec<Key> = KEYPAD.iter().flat_map(|row| row.iter().copied()).collect();
        let unique: HashSet<Key> = laid_out.iter().copied().collect();

        assert_eq!(laid_out.len(), Key::ALL.len());
        assert_eq!(unique, Key::ALL.iter().copied().collect::<HashSet<Key>>());
    }

    #[test]
    fn test_scan_compact_and_spaced_agree() {
        assert_eq!(scan("12+3=").unwrap(), scan("1 2 + 3 =").unwrap());
    }

    #[test]
    fn test_scan_prefers_negate_over_plus() {
        assert_eq!(scan("+/-").unwrap(), vec![Key::Negate]);
        assert_eq!(
            scan("+-").unwrap(),
            vec![
                Key::Operator(Operator::Add),
                Key::Operator(Operator::Subtract)
            ]
        );
    }

    #[test]
    fn test_multi_char_labels_are_keys() {
        for label in MULTI_CHAR_LABELS {
            assert!(Key::from_label(label).is_some(), "{} has no key", label);
            assert_eq!(scan(label).unwrap().len(), 1, "{} scans as one key", label);
        }
    }

    #[test]
    fn test_scan_clear_aliases() {
        assert_eq!(scan("AC").unwrap(), vec![Key::Clear]);
        assert_eq!(scan("c 5").unwrap(), vec![Key::Clear, Key::Digit(5)]);
    }

    #[test]
    fn test_scan_unicode_operators() {
        assert_eq!(
            scan("8÷2×3").unwrap(),
            vec![
                Key::Digit(8),
                Key::Operator(Operator::Divide),
                Key::Digit(2),
                Key::Operator(Operator::Multiply),
                Key::Digit(3),
            ]
        );
    }

    #[test]
    fn test_scan_reports_position() {
        let err = scan("1 + ^").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownKey {
                label: "^".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn test_scan_empty_line() {
        assert!(scan("   ").unwrap().is_empty());
    }

    #[test]
    fn test_render_layout_rows() {
        let text = render_layout();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("[ AC  ]"));
        assert!(lines[4].contains("[     0     ]"));
    }
}
