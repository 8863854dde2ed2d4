//! Canonical key form for free-form identifiers.
//!
//! Question labels, response-column names and variant codes arrive with
//! inconsistent accents, casing, whitespace and zero padding ("Câu 07",
//! "cau7", " CAU007 "). `normalize_key` maps every expected spelling of
//! the same identifier to one stable key, and is idempotent so derived
//! keys can be re-normalized safely.

use deunicode::deunicode;

/// Normalize an identifier to its canonical key form: fold diacritics to
/// ASCII, drop whitespace and punctuation, lowercase, and collapse a
/// zero-padded trailing number ("cau007" → "cau7").
pub fn normalize_key(text: &str) -> String {
    let folded = deunicode(text.trim());
    let mut key = String::with_capacity(folded.len());
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            key.push(ch.to_ascii_lowercase());
        }
    }
    collapse_trailing_zeros(&key)
}

/// Normalize a cell value used as a code or answer letter: trim,
/// uppercase, and treat the literal "nan" (a float-NaN artifact in
/// exported tables) as empty.
pub fn normalize_code(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    trimmed.to_uppercase()
}

/// Trailing digit run of a key with leading zeros stripped
/// ("cau07" → "7", "abc" → None). A run of only zeros yields "0".
pub fn trailing_number(key: &str) -> Option<String> {
    let digit_count = key.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digit_count == 0 {
        return None;
    }
    // keys are ASCII after normalization, so byte slicing is safe
    let digits = &key[key.len() - digit_count..];
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        Some("0".to_string())
    } else {
        Some(stripped.to_string())
    }
}

/// Strip leading zeros from the trailing digit run of an ASCII key.
fn collapse_trailing_zeros(key: &str) -> String {
    let digit_count = key.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    if digit_count < 2 {
        return key.to_string();
    }
    let split = key.len() - digit_count;
    let (stem, digits) = key.split_at(split);
    if !digits.starts_with('0') {
        return key.to_string();
    }
    let stripped = digits.trim_start_matches('0');
    let stripped = if stripped.is_empty() { "0" } else { stripped };
    format!("{stem}{stripped}")
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
