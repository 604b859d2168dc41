//! Argument validation
//!
//! Every setter argument goes through one of these checks and gets back
//! a tri-state answer: usable, missing, or not one of the allowed values.

use crate::keywords::{Keyword, PositionKeyword, PositionPreset};

/// Outcome of checking one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity<T> {
    /// Present and acceptable
    Valid(T),
    /// `None`, empty or only whitespace
    Missing,
    /// Present but not an allowed value (the offending input, trimmed)
    Invalid(String),
}

/// Trimmed value if it is defined and not blank
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Free-form value: only presence is checked
pub fn check_value(value: Option<&str>) -> Validity<&str> {
    match present(value) {
        Some(v) => Validity::Valid(v),
        None => Validity::Missing,
    }
}

/// Enumerated value: presence and keyword membership
pub fn check_keyword<K: Keyword>(value: Option<&str>) -> Validity<K> {
    match present(value) {
        None => Validity::Missing,
        Some(v) => match K::parse_keyword(v) {
            Some(keyword) => Validity::Valid(keyword),
            None => Validity::Invalid(v.to_string()),
        },
    }
}

/// A number with an optional unit or `%`, e.g. `0`, `-4px`, `12.5%`, `.5em`
pub fn is_numeric_length(value: &str) -> bool {
    let body = value.strip_prefix(['-', '+']).unwrap_or(value);
    let digits_end = body
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(body.len());
    let (number, unit) = body.split_at(digits_end);

    let has_digit = number.chars().any(|c| c.is_ascii_digit());
    let one_point = number.matches('.').count() <= 1;
    let unit_ok = unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic());
    has_digit && one_point && unit_ok
}

/// Whether a literal length is negative
pub fn is_negative_length(value: &str) -> bool {
    value
        .trim()
        .strip_prefix('-')
        .is_some_and(|rest| is_numeric_length(rest) && rest.chars().any(|c| matches!(c, '1'..='9')))
}

/// Canonical `background-position` value for a keyword, a compound
/// preset, or a raw two-component value such as `"25% 75%"`
pub fn background_position(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(keyword) = PositionKeyword::parse_keyword(value) {
        return Some(keyword.as_str().to_string());
    }
    if let Some(preset) = PositionPreset::parse_keyword(value) {
        return Some(preset.value().to_string());
    }

    let parts: Vec<&str> = value.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return None;
    };
    let component = |part: &str| match PositionKeyword::parse_keyword(part) {
        Some(PositionKeyword::Initial | PositionKeyword::Inherit) => None,
        Some(keyword) => Some(keyword.as_str().to_string()),
        None => is_numeric_length(part).then(|| part.to_string()),
    };
    Some(format!("{} {}", component(*x)?, component(*y)?))
}
