//! Locale-aware string comparison
//!
//! Approximates the Unicode default collation that browsers and most locales
//! apply when sorting human names. Strings are compared in three passes over
//! their canonical decomposition (NFD):
//!
//! 1. **Primary**: base characters only, ignoring accents and case.
//!    Whitespace sorts before punctuation and symbols, which sort before digits,
//!    which sort before letters.
//! 2. **Secondary**: unaccented before accented.
//! 3. **Tertiary**: lowercase before uppercase.
//!
//! Strings that are still equal fall back to code point order so the result
//! is a total order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Symbol
    }
}

/// Collation weights for a single string
#[derive(Debug, PartialEq, Eq)]
struct SortKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

impl SortKey {
    fn new(text: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary: Vec<Vec<char>> = Vec::new();
        let mut tertiary = Vec::new();

        for c in text.nfd() {
            if is_combining_mark(c) {
                // A leading mark has no base to attach to; it still counts.
                if secondary.is_empty() {
                    secondary.push(Vec::new());
                }
                if let Some(marks) = secondary.last_mut() {
                    marks.push(c);
                }
                continue;
            }

            let class = classify(c);
            for lower in c.to_lowercase() {
                primary.push((class, lower));
                tertiary.push(c.is_uppercase());
            }
            secondary.push(Vec::new());
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Compare two strings the way a human-facing, locale-aware sort would
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let key_a = SortKey::new(a);
    let key_b = SortKey::new(b);

    key_a
        .primary
        .cmp(&key_b.primary)
        .then_with(|| key_a.secondary.cmp(&key_b.secondary))
        .then_with(|| key_a.tertiary.cmp(&key_b.tertiary))
        .then_with(|| a.cmp(b))
}
