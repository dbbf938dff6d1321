//! Digit helpers: ASCII ↔ Devanagari rendering and two-digit padding.
//!
//! Every label the engine produces for a year, month number, or day goes
//! through these functions, so the parser can match user input against the
//! exact same strings.

use crate::language::Language;

/// Devanagari digits ०–९, indexed by value.
const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Render `n` with Devanagari digits (e.g. `2081` → `"२०८१"`).
pub fn to_nepali_digits(n: u32) -> String {
    transliterate(&n.to_string())
}

/// Render `n` in the digits of `lang`.
pub fn to_localized_digits(n: u32, lang: Language) -> String {
    match lang {
        Language::Ne => to_nepali_digits(n),
        Language::En => n.to_string(),
    }
}

/// Render `n` with at least two digits, left-padded with the zero of `lang`
/// (`5` → `"05"` or `"०५"`).
pub fn pad_two_digits(n: u32, lang: Language) -> String {
    let padded = format!("{n:02}");
    match lang {
        Language::Ne => transliterate(&padded),
        Language::En => padded,
    }
}

fn transliterate(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NEPALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Return `true` if `c` is an ASCII or Devanagari decimal digit.
pub fn is_any_digit(c: char) -> bool {
    c.is_ascii_digit() || NEPALI_DIGITS.contains(&c)
}
