//! Numeral fallback
//!
//! Resolves French number words and literal digits once no phrase rule has
//! matched. Out-of-range values are skipped, never clamped. Fractions such
//! as "2,5" are not answers on an integer scale and resolve to nothing.

use crate::scale::Scale;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Spoken numbers, including common recognizer truncations
const NUMBER_WORDS: &[(&str, u32)] = &[
    ("zero", 0),
    ("un", 1),
    ("une", 1),
    ("deux", 2),
    ("deu", 2),
    ("trois", 3),
    ("troi", 3),
    ("quatre", 4),
    ("quatr", 4),
    ("cinq", 5),
    ("saink", 5),
    ("six", 6),
    ("sept", 7),
    ("set", 7),
    ("huit", 8),
    ("neuf", 9),
    ("dix", 10),
];

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\b\d+\b").expect("digit pattern is valid");
    // Checked on the raw transcript: normalization turns "2,5" into "2 5"
    static ref DECIMAL: Regex = Regex::new(r"\d[.,]\d").expect("decimal pattern is valid");
}

/// Which fallback step resolved the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumeralKind {
    /// A number word token ("quatre")
    Word,
    /// The whole text is a digit string ("3")
    Exact,
    /// A digit token inside longer text ("note 3")
    Embedded,
}

/// Value of a single number word
pub fn word_value(token: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, value)| *value)
}

/// Whether the raw transcript carries a decimal number ("2,5", "3.5")
pub fn has_decimal(raw: &str) -> bool {
    DECIMAL.is_match(raw)
}

/// Resolve a score from normalized text, trying each step in order
pub fn resolve(scale: Scale, normalized: &str, tokens: &[&str]) -> Option<(u8, NumeralKind)> {
    // (a) number words, left to right
    for token in tokens {
        if let Some(value) = word_value(token) {
            if scale.contains(value) {
                debug!("Number word '{}' -> {}", token, value);
                return to_score(value).map(|s| (s, NumeralKind::Word));
            }
            debug!("Number word '{}' out of range for {}", token, scale);
        }
    }

    // (b) the entire text is a digit string
    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        if let Some(value) = parse_in_range(scale, normalized) {
            debug!("Digit '{}' -> {}", normalized, value);
            return Some((value, NumeralKind::Exact));
        }
    }

    // (c) a whole-token digit run anywhere
    for found in DIGIT_RUN.find_iter(normalized) {
        if let Some(value) = parse_in_range(scale, found.as_str()) {
            debug!("Embedded digit '{}' -> {}", found.as_str(), value);
            return Some((value, NumeralKind::Embedded));
        }
    }

    None
}

fn parse_in_range(scale: Scale, digits: &str) -> Option<u8> {
    // Overflowing digit strings are simply out of range
    let value = digits.parse::<u32>().ok()?;
    if scale.contains(value) {
        to_score(value)
    } else {
        None
    }
}

fn to_score(value: u32) -> Option<u8> {
    u8::try_from(value).ok()
}
