//! Merge per-student outcome scores into the roster.
//!
//! Output rows follow roster order. Roster columns that look like
//! leftovers from a previous run (outcome or total columns) are stripped
//! before the merge; students with no response row keep all outcome
//! columns at zero. Outcome columns are additionally rolled up into
//! top-level outcome families ("CLO1.1" and "CLO1.2" into "CLO1").

use std::collections::{BTreeMap, HashMap};

use deunicode::deunicode;

use super::diag::GradeError;
use super::normalize::normalize_key;
use crate::table::Table;

/// One final per-student row.
#[derive(Debug, Clone)]
pub struct RosterRecord {
    pub student_id: String,
    /// Kept roster cells, aligned with `Aggregate::roster_columns`.
    pub fields: Vec<String>,
    /// Per-outcome totals, aligned with `Aggregate::outcome_columns`.
    pub outcomes: Vec<f64>,
    /// Family totals, aligned with `Aggregate::group_columns`.
    pub groups: Vec<f64>,
    /// Sum of all outcome columns.
    pub grand_total: f64,
    /// Sum of family totals; equals `grand_total` when no family is
    /// detected. The score distribution is banded on this value.
    pub grouped_total: f64,
}

#[derive(Debug, Clone)]
pub struct Aggregate {
    pub roster_columns: Vec<String>,
    pub outcome_columns: Vec<String>,
    pub group_columns: Vec<String>,
    pub records: Vec<RosterRecord>,
}

/// Locate the student-id column ("MSSV" and friends).
pub fn student_id_column(table: &Table) -> Option<usize> {
    table.find_column(|h| {
        let key = normalize_key(h);
        key.contains("mssv") || key == "id" || key == "studentid"
    })
}

/// Top-level outcome family of a code: leading letters plus the digit
/// run that follows ("CLO1.2" → "CLO1"). None when the code does not
/// have that shape.
pub fn outcome_family(code: &str) -> Option<String> {
    let letters: String = code.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return None;
    }
    let digits: String = code[letters.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{letters}{digits}"))
}

/// A roster column left over from a previous scoring run (outcome or
/// total columns), stripped before the merge to avoid duplication.
fn is_stale_column(header: &str) -> bool {
    let folded = deunicode(header).to_lowercase();
    folded.contains("clo") || folded.contains("tong") || folded.contains("total")
}

/// Left-merge the roster with per-student outcome scores.
pub fn aggregate(
    roster: &Table,
    scores: &HashMap<String, BTreeMap<String, f64>>,
    outcome_columns: &[String],
) -> Result<Aggregate, GradeError> {
    let id_col = student_id_column(roster).ok_or_else(|| {
        GradeError::Configuration("no student-id column (MSSV) in the roster".to_string())
    })?;

    let kept_cols: Vec<usize> = (0..roster.headers().len())
        .filter(|&i| i == id_col || !is_stale_column(&roster.headers()[i]))
        .collect();
    let roster_columns: Vec<String> = kept_cols
        .iter()
        .map(|&i| roster.headers()[i].clone())
        .collect();

    // Family rollup layout, derived once from the outcome columns.
    let mut members: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, code) in outcome_columns.iter().enumerate() {
        if let Some(family) = outcome_family(code) {
            members.entry(family).or_default().push(idx);
        }
    }
    // A family column is only worth emitting when it says more than the
    // outcome column it mirrors.
    let group_columns: Vec<String> = members
        .iter()
        .filter(|(family, idxs)| idxs.len() > 1 || outcome_columns[idxs[0]] != **family)
        .map(|(family, _)| family.clone())
        .collect();

    let mut records = Vec::with_capacity(roster.len());
    for row in 0..roster.len() {
        let student_id = roster.cell(row, id_col).trim().to_string();
        let fields = kept_cols
            .iter()
            .map(|&i| roster.cell(row, i).to_string())
            .collect();

        let empty = BTreeMap::new();
        let student_scores = scores.get(&student_id).unwrap_or(&empty);
        let outcomes: Vec<f64> = outcome_columns
            .iter()
            .map(|code| student_scores.get(code).copied().unwrap_or(0.0))
            .collect();
        let grand_total: f64 = outcomes.iter().sum();

        let family_sum = |idxs: &[usize]| idxs.iter().map(|&i| outcomes[i]).sum::<f64>();
        let groups: Vec<f64> = group_columns
            .iter()
            .map(|family| family_sum(&members[family]))
            .collect();
        let grouped_total = if members.is_empty() {
            grand_total
        } else {
            members.values().map(|idxs| family_sum(idxs)).sum()
        };

        records.push(RosterRecord {
            student_id,
            fields,
            outcomes,
            groups,
            grand_total,
            grouped_total,
        });
    }

    Ok(Aggregate {
        roster_columns,
        outcome_columns: outcome_columns.to_vec(),
        group_columns,
        records,
    })
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
