// SPDX-License-Identifier: MPL-2.0
//! Live phone mask for Brazilian numbers.
//!
//! The mask is derived from the digits alone, so re-applying it to an
//! already formatted value yields the same string, and stripping the
//! punctuation always gives back the digits that were typed.

/// Keeps only ASCII digits.
#[must_use]
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats typed input progressively:
///
/// | digits | display |
/// |---|---|
/// | 11+ | `(DD) DDDDD-DDDD` followed by any extra digits |
/// | 10 | `(DD) DDDD-DDDD` |
/// | 6–9 | `(DD) DDDD` followed by the rest |
/// | 2–5 | `(DD) ` followed by the rest |
/// | 0–1 | the digits as typed |
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits(raw);
    let len = digits.len();

    // ASCII digits only, so byte slicing is safe.
    if len >= 11 {
        format!(
            "({}) {}-{}{}",
            &digits[..2],
            &digits[2..7],
            &digits[7..11],
            &digits[11..]
        )
    } else if len == 10 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else if len >= 6 {
        format!("({}) {}{}", &digits[..2], &digits[2..6], &digits[6..])
    } else if len >= 2 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}
