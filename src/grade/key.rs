//! Builders for the derived answer-key and outcome-point tables.
//!
//! The raw answer-key table has one row per question, one column per exam
//! variant (holding the outcome code that question probes on that
//! variant), and one or more answer columns tagged with a variant code in
//! their header ("Đáp án_134"). The builder canonicalizes all of this
//! into flat [`AnswerKeyEntry`] rows, joining point values from the
//! outcome-points table, so the scorer never touches raw headers again.

use std::collections::{HashMap, HashSet};

use super::diag::{Diagnostic, GradeError};
use super::normalize::{normalize_code, normalize_key};
use crate::table::Table;

/// One (question, variant) row of the derived answer key.
#[derive(Debug, Clone)]
pub struct AnswerKeyEntry {
    /// Canonical question key ("cau7").
    pub question: String,
    /// Variant code, as the variant column header reads (trimmed).
    pub variant: String,
    /// Correct answer letter, uppercased. Empty when the variant has no
    /// usable answer column.
    pub answer: String,
    /// Outcome code this question probes, uppercased. Empty when unset.
    pub outcome: String,
    /// Point value joined from the outcome-points table; 0 for unknown
    /// or empty outcomes.
    pub points: f64,
}

#[derive(Debug, Clone)]
pub struct AnswerKey {
    pub entries: Vec<AnswerKeyEntry>,
    /// Variant codes in answer-key column order.
    pub variants: Vec<String>,
}

impl AnswerKey {
    /// All distinct non-empty outcome codes, sorted.
    pub fn outcome_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .entries
            .iter()
            .filter(|e| !e.outcome.is_empty())
            .map(|e| e.outcome.clone())
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Distinct question keys in first-seen order.
    pub fn question_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for entry in &self.entries {
            if seen.insert(entry.question.as_str()) {
                keys.push(entry.question.clone());
            }
        }
        keys
    }

    /// Highest total a student can earn: the best per-variant sum of
    /// point values over scoreable entries.
    pub fn max_achievable(&self) -> f64 {
        let mut per_variant: HashMap<&str, f64> = HashMap::new();
        for entry in &self.entries {
            if entry.answer.is_empty() || entry.outcome.is_empty() {
                continue;
            }
            *per_variant.entry(entry.variant.as_str()).or_insert(0.0) += entry.points;
        }
        per_variant.values().fold(0.0, |acc, &v| acc.max(v))
    }
}

/// Build the outcome-code → point-value map from the two-column points
/// table. Codes are uppercased and trimmed; non-numeric or missing point
/// cells coerce to 0; duplicate codes last-wins.
pub fn build_point_table(table: &Table) -> Result<HashMap<String, f64>, GradeError> {
    if table.headers().len() < 2 {
        return Err(GradeError::Configuration(
            "points table needs two columns (outcome code, points)".to_string(),
        ));
    }
    let mut points = HashMap::new();
    for row in 0..table.len() {
        let code = normalize_code(table.cell(row, 0));
        if code.is_empty() {
            continue;
        }
        let value = table.cell(row, 1).trim().parse::<f64>().unwrap_or(0.0);
        points.insert(code, value);
    }
    Ok(points)
}

/// Build the derived answer key from the raw answer-key table.
///
/// Column roles are detected by header content: answer columns carry an
/// "answer" marker ("đáp"/"dap"), the question-label column carries
/// "câu"/"question" (falling back to the first remaining column), and
/// every other column is a variant column. Fails only when no variant
/// column can be identified at all.
pub fn build_answer_key(
    table: &Table,
    points: &HashMap<String, f64>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<AnswerKey, GradeError> {
    if table.headers().is_empty() {
        return Err(GradeError::Configuration(
            "answer-key table has no columns".to_string(),
        ));
    }

    let normalized: Vec<String> = table.headers().iter().map(|h| normalize_key(h)).collect();

    let answer_cols: Vec<usize> = (0..normalized.len())
        .filter(|&i| normalized[i].contains("dap") || normalized[i].contains("answer"))
        .collect();

    let question_col = (0..normalized.len())
        .filter(|i| !answer_cols.contains(i))
        .find(|&i| normalized[i].contains("cau") || normalized[i].contains("question"))
        .or_else(|| (0..normalized.len()).find(|i| !answer_cols.contains(i)))
        .ok_or_else(|| {
            GradeError::Configuration("no question-label column in the answer key".to_string())
        })?;

    let variant_cols: Vec<usize> = (0..normalized.len())
        .filter(|i| *i != question_col && !answer_cols.contains(i))
        .collect();

    if variant_cols.is_empty() {
        return Err(GradeError::Configuration(
            "no variant columns in the answer key".to_string(),
        ));
    }

    // Associate each variant with the answer column whose header embeds
    // the variant code; with exactly one answer column overall, fall
    // back to it (reported when the key is multi-variant).
    let mut answer_col_for_variant: HashMap<usize, usize> = HashMap::new();
    for &vc in &variant_cols {
        let code_key = normalize_key(&table.headers()[vc]);
        let tagged = answer_cols
            .iter()
            .copied()
            .find(|&ac| !code_key.is_empty() && normalized[ac].contains(&code_key));
        match tagged {
            Some(ac) => {
                answer_col_for_variant.insert(vc, ac);
            }
            None if answer_cols.len() == 1 => {
                answer_col_for_variant.insert(vc, answer_cols[0]);
                if variant_cols.len() > 1 {
                    diagnostics.push(Diagnostic::AmbiguousAnswerFallback {
                        variant: table.headers()[vc].trim().to_string(),
                    });
                }
            }
            None => {
                diagnostics.push(Diagnostic::UnscorableVariant {
                    variant: table.headers()[vc].trim().to_string(),
                });
            }
        }
    }

    let mut unknown_outcomes: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for row in 0..table.len() {
        let question = normalize_key(table.cell(row, question_col));
        if question.is_empty() {
            continue;
        }
        for &vc in &variant_cols {
            let variant = table.headers()[vc].trim().to_string();
            let outcome = normalize_code(table.cell(row, vc));
            let entry_points = if outcome.is_empty() {
                0.0
            } else {
                match points.get(&outcome) {
                    Some(&p) => p,
                    None => {
                        if unknown_outcomes.insert(outcome.clone()) {
                            diagnostics.push(Diagnostic::UnknownOutcome {
                                outcome: outcome.clone(),
                            });
                        }
                        0.0
                    }
                }
            };
            let answer = answer_col_for_variant
                .get(&vc)
                .map(|&ac| normalize_code(table.cell(row, ac)))
                .unwrap_or_default();

            entries.push(AnswerKeyEntry {
                question: question.clone(),
                variant,
                answer,
                outcome,
                points: entry_points,
            });
        }
    }

    let variants = variant_cols
        .iter()
        .map(|&vc| table.headers()[vc].trim().to_string())
        .collect();

    Ok(AnswerKey { entries, variants })
}

#[cfg(test)]
#[path = "key_test.rs"]
mod tests;
