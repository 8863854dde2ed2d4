//! Per-student scoring over the derived answer key.
//!
//! Everything the scorer needs arrives as an explicit argument: the
//! per-variant entry subset, the question→response-column map, and the
//! student's own answers. Accumulation is plain commutative addition
//! into a BTreeMap, so iteration order never affects the result.

use std::collections::{BTreeMap, HashMap};

use super::key::{AnswerKey, AnswerKeyEntry};

/// One student's raw submission after normalization: id, declared
/// variant, and answers keyed by normalized response-column key.
#[derive(Debug, Clone)]
pub struct ResponseRow {
    pub student_id: String,
    pub declared_variant: String,
    pub answers: HashMap<String, String>,
}

/// Answer-key entries pre-partitioned by variant, built once per run so
/// scoring a student never rescans the full key.
pub struct VariantIndex<'a> {
    by_variant: HashMap<&'a str, Vec<&'a AnswerKeyEntry>>,
}

impl<'a> VariantIndex<'a> {
    pub fn build(key: &'a AnswerKey) -> Self {
        let mut by_variant: HashMap<&str, Vec<&AnswerKeyEntry>> = HashMap::new();
        for entry in &key.entries {
            by_variant.entry(entry.variant.as_str()).or_default().push(entry);
        }
        VariantIndex { by_variant }
    }

    pub fn entries(&self, variant: &str) -> &[&'a AnswerKeyEntry] {
        self.by_variant
            .get(variant)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Score one student against one variant's entries. A submitted answer
/// earns the entry's points only on an exact match with the key answer
/// (both already uppercased and trimmed); wrong and blank both earn 0.
/// Entries with no outcome code or no key answer are skipped.
pub fn score_student(
    row: &ResponseRow,
    entries: &[&AnswerKeyEntry],
    resolver: &HashMap<String, String>,
) -> BTreeMap<String, f64> {
    let mut scores = BTreeMap::new();
    for entry in entries {
        if entry.answer.is_empty() || entry.outcome.is_empty() {
            continue;
        }
        let Some(response_col) = resolver.get(&entry.question) else {
            continue;
        };
        let submitted = row
            .answers
            .get(response_col)
            .map(String::as_str)
            .unwrap_or("");
        if submitted == entry.answer {
            *scores.entry(entry.outcome.clone()).or_insert(0.0) += entry.points;
        }
    }
    scores
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
