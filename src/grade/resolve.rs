//! Question-identity resolution and variant selection.
//!
//! Two naming gaps have to be bridged before scoring: answer-key question
//! labels vs. response-table column names ("cau07" vs "cau7"), and the
//! variant code a student declares vs. the variant column headers of the
//! answer key ("134.0" vs "134"). Resolution strategies are ordered and
//! first-match-wins, so the outcome is deterministic.

use std::collections::HashMap;

use super::normalize::trailing_number;

/// Map each question key to a response-column key. Strategies, in order:
/// exact equality, trailing-number equality (zero padding stripped),
/// substring containment either direction. Containment is a last resort
/// and may over-match on short keys. Questions no strategy can place are
/// returned separately for diagnostics.
pub fn resolve_questions(
    questions: &[String],
    response_cols: &[String],
) -> (HashMap<String, String>, Vec<String>) {
    let mut resolved = HashMap::new();
    let mut unresolved = Vec::new();

    for question in questions {
        let hit = response_cols
            .iter()
            .find(|col| *col == question)
            .or_else(|| {
                let number = trailing_number(question)?;
                response_cols
                    .iter()
                    .find(|col| trailing_number(col.as_str()).as_deref() == Some(number.as_str()))
            })
            .or_else(|| {
                response_cols
                    .iter()
                    .find(|col| col.contains(question.as_str()) || question.contains(col.as_str()))
            });

        match hit {
            Some(col) => {
                resolved.insert(question.clone(), col.clone());
            }
            None => unresolved.push(question.clone()),
        }
    }

    (resolved, unresolved)
}

/// Canonical form of a declared variant value: a float with zero
/// fractional part collapses to its integer string ("134.0" → "134");
/// anything else is used trimmed. Empty and NaN-like values yield None.
pub fn canonical_variant(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() && value.fract() == 0.0 {
            return Some(format!("{}", value as i64));
        }
    }
    Some(trimmed.to_string())
}

/// Pick the variant column a student should be graded against: exact
/// code match first, then a column whose name contains the code, then a
/// column whose first embedded number equals the code. None means the
/// student cannot be scored.
pub fn select_variant<'a>(declared: &str, variants: &'a [String]) -> Option<&'a str> {
    let code = canonical_variant(declared)?;
    variants
        .iter()
        .find(|v| v.as_str() == code)
        .or_else(|| variants.iter().find(|v| v.contains(&code)))
        .or_else(|| {
            variants
                .iter()
                .find(|v| first_number(v.as_str()).as_deref() == Some(code.as_str()))
        })
        .map(|v| v.as_str())
}

/// First run of digits in a string ("de 134b" → "134").
fn first_number(text: &str) -> Option<String> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits)
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
