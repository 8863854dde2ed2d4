//! Scoring pipeline: four raw tables in, merged roster + distribution out.
//!
//! The flow mirrors the data model end to end: build the outcome-point
//! and answer-key tables, resolve question identities against the
//! response columns, pick each student's variant, score, merge into the
//! roster, and band the totals. Per-row anomalies degrade to zero credit
//! and are collected as diagnostics; only structural problems abort.

pub(crate) mod aggregate;
pub(crate) mod diag;
pub(crate) mod distribution;
pub(crate) mod key;
pub(crate) mod normalize;
pub(crate) mod report;
pub(crate) mod resolve;
pub(crate) mod scoring;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use aggregate::Aggregate;
use diag::{Diagnostic, GradeError};
use distribution::Distribution;
use normalize::{normalize_code, normalize_key};
use scoring::ResponseRow;

use crate::table::Table;

/// Everything one scoring run produces.
#[derive(Debug)]
pub struct ScoreReport {
    pub aggregate: Aggregate,
    pub distribution: Distribution,
    /// Best per-variant sum of point values — the score a student with
    /// every answer correct would reach.
    pub max_achievable: f64,
    pub variants: Vec<String>,
    /// Response rows that matched a variant and were graded.
    pub scored_students: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load the four CSV inputs, score, and print or export the results.
pub fn run(
    roster_path: &Path,
    responses_path: &Path,
    answer_key_path: &Path,
    points_path: &Path,
    json: bool,
    output: Option<&Path>,
    dist_output: Option<&Path>,
) -> Result<(), GradeError> {
    let roster = Table::from_csv_path(roster_path)?;
    let responses = Table::from_csv_path(responses_path)?;
    let answer_key = Table::from_csv_path(answer_key_path)?;
    let points = Table::from_csv_path(points_path)?;

    let report = compute_scores(&roster, &responses, &answer_key, &points)?;

    if json {
        report::print_json(&report)?;
    } else {
        report::print_report(&report);
    }
    if let Some(path) = output {
        report::write_result_csv(&report, path)?;
    }
    if let Some(path) = dist_output {
        report::write_distribution_csv(&report, path)?;
    }

    Ok(())
}

/// Run the full pipeline over in-memory tables.
pub fn compute_scores(
    roster: &Table,
    responses: &Table,
    answer_key_table: &Table,
    points_table: &Table,
) -> Result<ScoreReport, GradeError> {
    let points = key::build_point_table(points_table)?;

    let mut diagnostics = Vec::new();
    let answer_key = key::build_answer_key(answer_key_table, &points, &mut diagnostics)?;

    let (rows, response_col_keys) = parse_responses(responses)?;

    let question_keys = answer_key.question_keys();
    let (resolver, unresolved) = resolve::resolve_questions(&question_keys, &response_col_keys);
    for question in unresolved {
        diagnostics.push(Diagnostic::UnresolvedQuestion { question });
    }

    let index = scoring::VariantIndex::build(&answer_key);
    let mut scores: HashMap<String, BTreeMap<String, f64>> = HashMap::new();
    let mut scored_students = 0;
    for row in &rows {
        match resolve::select_variant(&row.declared_variant, &answer_key.variants) {
            Some(variant) => {
                let outcome_scores = scoring::score_student(row, index.entries(variant), &resolver);
                scores.insert(row.student_id.clone(), outcome_scores);
                scored_students += 1;
            }
            None => {
                diagnostics.push(Diagnostic::UnscoredStudent {
                    student_id: row.student_id.clone(),
                    declared_variant: row.declared_variant.clone(),
                });
                scores.insert(row.student_id.clone(), BTreeMap::new());
            }
        }
    }

    let outcome_columns = answer_key.outcome_codes();
    let aggregate = aggregate::aggregate(roster, &scores, &outcome_columns)?;
    let distribution = distribution::summarize(aggregate.records.iter().map(|r| r.grouped_total));

    Ok(ScoreReport {
        aggregate,
        distribution,
        max_achievable: answer_key.max_achievable(),
        variants: answer_key.variants.clone(),
        scored_students,
        diagnostics,
    })
}

/// Parse the response table into per-student rows. Returns the rows and
/// the normalized keys of the question columns (resolver input).
fn parse_responses(table: &Table) -> Result<(Vec<ResponseRow>, Vec<String>), GradeError> {
    let id_col = aggregate::student_id_column(table).ok_or_else(|| {
        GradeError::Configuration("no student-id column (MSSV) in the response table".to_string())
    })?;
    let variant_col = declared_variant_column(table, id_col).ok_or_else(|| {
        GradeError::Configuration(
            "no declared-variant column (mã đề) in the response table".to_string(),
        )
    })?;

    let question_cols: Vec<(usize, String)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != id_col && *i != variant_col)
        .map(|(i, h)| (i, normalize_key(h)))
        .filter(|(_, key)| key.starts_with("cau"))
        .collect();

    let mut rows = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let answers = question_cols
            .iter()
            .map(|(i, key)| (key.clone(), normalize_code(table.cell(row, *i))))
            .collect();
        rows.push(ResponseRow {
            student_id: table.cell(row, id_col).trim().to_string(),
            declared_variant: table.cell(row, variant_col).trim().to_string(),
            answers,
        });
    }

    let response_col_keys = question_cols.into_iter().map(|(_, key)| key).collect();
    Ok((rows, response_col_keys))
}

/// Locate the declared-variant column ("đề", "mã đề", "code") by
/// normalized header, most specific spelling first.
fn declared_variant_column(table: &Table, id_col: usize) -> Option<usize> {
    let keys: Vec<String> = table.headers().iter().map(|h| normalize_key(h)).collect();
    let find = |pred: fn(&str) -> bool| {
        keys.iter()
            .enumerate()
            .find(|(i, k)| *i != id_col && pred(k.as_str()))
            .map(|(i, _)| i)
    };
    find(|k| k == "made")
        .or_else(|| find(|k| k == "de"))
        .or_else(|| find(|k| k.contains("made") || k.contains("code")))
        .or_else(|| find(|k| k.starts_with("de")))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
