//! Roman numeral conversion.
//!
//! Only the classical symbols are supported, so the largest representable
//! value is `MMMCMXCIX` (3999).

use crate::{MerchantError, MerchantResult};
use regex::Regex;
use std::sync::LazyLock;

/// Symbols in descending value order, subtractive pairs included.
const SYMBOLS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

pub const MAX_VALUE: u32 = 3999;

static ROMAN_NUMERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("Invalid regex")
});

/// True if `symbol` is one of the seven Roman digit characters (either case).
pub fn is_roman_digit(symbol: char) -> bool {
    matches!(
        symbol.to_ascii_uppercase(),
        'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'
    )
}

/// Convert a Roman numeral to its integer value.
///
/// Blank input converts to `0`. Surrounding whitespace and letter case are
/// ignored. Anything the classical grammar rejects, including a fourth
/// repeated symbol, fails with [`MerchantError::InvalidNumeral`] carrying the
/// input exactly as given.
pub fn convert(roman: &str) -> MerchantResult<u32> {
    let normalized = roman.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Ok(0);
    }

    if !ROMAN_NUMERAL_PATTERN.is_match(&normalized) {
        return Err(MerchantError::invalid_numeral(roman));
    }

    let mut remaining = normalized.as_str();
    let mut value = 0;
    for (symbol, symbol_value) in SYMBOLS {
        while let Some(rest) = remaining.strip_prefix(symbol) {
            value += symbol_value;
            remaining = rest;
        }
    }

    // The pattern only admits strings the table can consume completely.
    if !remaining.is_empty() {
        return Err(MerchantError::invalid_numeral(roman));
    }

    Ok(value)
}

/// Render `value` in minimal classical form, `None` outside `1..=3999`.
pub fn to_roman(value: u32) -> Option<String> {
    if value == 0 || value > MAX_VALUE {
        return None;
    }

    let mut remaining = value;
    let mut roman = String::new();
    for (symbol, symbol_value) in SYMBOLS {
        while remaining >= symbol_value {
            roman.push_str(symbol);
            remaining -= symbol_value;
        }
    }
    Some(roman)
}
