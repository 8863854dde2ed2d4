use std::path::Path;

use serde::Serialize;

use super::ScoreReport;
use super::diag::GradeError;
use super::distribution::BANDS;

/// Column headers for the derived total columns in exports. Both carry
/// a "total" marker so a re-run on the exported file strips them as
/// stale columns.
const TOTAL_HEADER: &str = "Total";
const GROUP_TOTAL_HEADER: &str = "Group total";

fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Print the scoring run as a formatted report: summary, per-student
/// totals, score distribution, and collected diagnostics.
pub fn print_report(report: &ScoreReport) {
    let sep = separator(58);

    println!("CLO Score Summary");
    println!("{sep}");
    println!(
        " Students:       {} ({} scored)",
        report.aggregate.records.len(),
        report.scored_students
    );
    println!(" Variants:       {}", report.variants.join(", "));
    println!(
        " Outcomes:       {}",
        report.aggregate.outcome_columns.join(", ")
    );
    println!(" Max Achievable: {:.2}", report.max_achievable);
    println!("{sep}");

    if !report.aggregate.records.is_empty() {
        let id_width = report
            .aggregate
            .records
            .iter()
            .map(|r| r.student_id.len())
            .max()
            .unwrap_or(0)
            .max(4);
        println!(" {:<width$}  {:>7}  {:>7}", "ID", "Total", "Grouped", width = id_width);
        println!("{sep}");
        for record in &report.aggregate.records {
            println!(
                " {:<width$}  {:>7.2}  {:>7.2}",
                record.student_id,
                record.grand_total,
                record.grouped_total,
                width = id_width
            );
        }
        println!("{sep}");
    }

    println!(" Score Distribution");
    println!("{sep}");
    println!(" {:<8}  {:>8}", "Band", "Students");
    for (band, count) in BANDS.iter().zip(report.distribution.counts.iter()) {
        println!(" {:<8}  {:>8}", band.label(), count);
    }
    println!("{sep}");

    if !report.diagnostics.is_empty() {
        println!(" Diagnostics ({})", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!(" warning: {diagnostic}");
        }
        println!("{sep}");
    }
}

/// JSON-serializable per-student row.
#[derive(Serialize)]
struct JsonRecord {
    student_id: String,
    roster: Vec<(String, String)>,
    outcomes: Vec<(String, f64)>,
    groups: Vec<(String, f64)>,
    total: f64,
    group_total: f64,
}

/// JSON-serializable band count.
#[derive(Serialize)]
struct JsonBand {
    band: &'static str,
    students: usize,
}

/// JSON-serializable representation of the full scoring run.
#[derive(Serialize)]
struct JsonReport<'a> {
    students: usize,
    scored_students: usize,
    variants: &'a [String],
    outcome_columns: &'a [String],
    group_columns: &'a [String],
    max_achievable: f64,
    records: Vec<JsonRecord>,
    distribution: Vec<JsonBand>,
    diagnostics: &'a [super::diag::Diagnostic],
}

/// Serialize the scoring run to pretty-printed JSON on stdout.
pub fn print_json(report: &ScoreReport) -> Result<(), GradeError> {
    let pair = |names: &[String], values: &[f64]| {
        names
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect::<Vec<_>>()
    };

    let json = JsonReport {
        students: report.aggregate.records.len(),
        scored_students: report.scored_students,
        variants: &report.variants,
        outcome_columns: &report.aggregate.outcome_columns,
        group_columns: &report.aggregate.group_columns,
        max_achievable: report.max_achievable,
        records: report
            .aggregate
            .records
            .iter()
            .map(|r| JsonRecord {
                student_id: r.student_id.clone(),
                roster: report
                    .aggregate
                    .roster_columns
                    .iter()
                    .cloned()
                    .zip(r.fields.iter().cloned())
                    .collect(),
                outcomes: pair(&report.aggregate.outcome_columns, &r.outcomes),
                groups: pair(&report.aggregate.group_columns, &r.groups),
                total: r.grand_total,
                group_total: r.grouped_total,
            })
            .collect(),
        distribution: BANDS
            .iter()
            .zip(report.distribution.counts.iter())
            .map(|(band, &students)| JsonBand {
                band: band.label(),
                students,
            })
            .collect(),
        diagnostics: &report.diagnostics,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Format a score cell: whole numbers without a trailing ".0".
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Export the merged roster as CSV: roster columns, per-outcome columns,
/// family columns, then the two total columns.
pub fn write_result_csv(report: &ScoreReport, path: &Path) -> Result<(), GradeError> {
    let agg = &report.aggregate;
    let mut headers = agg.roster_columns.clone();
    headers.extend(agg.outcome_columns.iter().cloned());
    headers.extend(agg.group_columns.iter().cloned());
    headers.push(TOTAL_HEADER.to_string());
    headers.push(GROUP_TOTAL_HEADER.to_string());

    let rows = agg.records.iter().map(|record| {
        let mut row = record.fields.clone();
        row.extend(record.outcomes.iter().map(|v| format_score(*v)));
        row.extend(record.groups.iter().map(|v| format_score(*v)));
        row.push(format_score(record.grand_total));
        row.push(format_score(record.grouped_total));
        row
    });

    crate::table::write_csv(path, &headers, rows)
}

/// Export the six-band distribution as CSV.
pub fn write_distribution_csv(report: &ScoreReport, path: &Path) -> Result<(), GradeError> {
    let headers = vec!["Band".to_string(), "Students".to_string()];
    let rows = BANDS
        .iter()
        .zip(report.distribution.counts.iter())
        .map(|(band, count)| vec![band.label().to_string(), count.to_string()]);
    crate::table::write_csv(path, &headers, rows)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
