use super::*;

fn points_table(rows: &[(&str, &str)]) -> Table {
    Table::new(
        vec!["CLO".to_string(), "Điểm".to_string()],
        rows.iter()
            .map(|(c, p)| vec![c.to_string(), p.to_string()])
            .collect(),
    )
}

fn key_table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn point_table_coerces_and_last_wins() {
    let table = points_table(&[
        (" clo1.1 ", "2.5"),
        ("CLO1.1", "3"),
        ("CLO2", "abc"),
        ("CLO3", ""),
        ("", "9"),
    ]);
    let points = build_point_table(&table).unwrap();
    assert_eq!(points.get("CLO1.1"), Some(&3.0));
    assert_eq!(points.get("CLO2"), Some(&0.0));
    assert_eq!(points.get("CLO3"), Some(&0.0));
    assert_eq!(points.len(), 3);
}

#[test]
fn point_table_rejects_single_column() {
    let table = Table::new(vec!["CLO".to_string()], vec![]);
    let err = build_point_table(&table).unwrap_err();
    assert!(matches!(err, GradeError::Configuration(_)));
}

#[test]
fn builds_entries_per_question_and_variant() {
    let points = build_point_table(&points_table(&[("CLO1", "2"), ("CLO2", "3")])).unwrap();
    let table = key_table(
        &["Câu", "134", "210", "Đáp án_134", "Đáp án_210"],
        &[
            &["Câu 01", "CLO1", "CLO2", "a", "b"],
            &["Câu 02", "CLO2", "CLO1", "c", "d"],
        ],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();

    assert_eq!(key.variants, ["134", "210"]);
    assert_eq!(key.entries.len(), 4);
    assert!(diags.is_empty());

    let e = key
        .entries
        .iter()
        .find(|e| e.question == "cau1" && e.variant == "134")
        .unwrap();
    assert_eq!(e.answer, "A");
    assert_eq!(e.outcome, "CLO1");
    assert_eq!(e.points, 2.0);

    let e = key
        .entries
        .iter()
        .find(|e| e.question == "cau2" && e.variant == "210")
        .unwrap();
    assert_eq!(e.answer, "D");
    assert_eq!(e.outcome, "CLO1");
}

#[test]
fn unknown_outcome_scores_zero_and_reports_once() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(
        &["Câu", "134", "Đáp án_134"],
        &[
            &["Câu 1", "CLO9", "A"],
            &["Câu 2", "CLO9", "B"],
        ],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    assert!(key.entries.iter().all(|e| e.points == 0.0));
    assert_eq!(
        diags,
        vec![Diagnostic::UnknownOutcome {
            outcome: "CLO9".to_string()
        }]
    );
}

#[test]
fn single_answer_column_fallback_is_flagged_when_multi_variant() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(
        &["Câu", "134", "210", "Đáp án"],
        &[&["Câu 1", "CLO1", "CLO1", "A"]],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    assert!(key.entries.iter().all(|e| e.answer == "A"));
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| matches!(
        d,
        Diagnostic::AmbiguousAnswerFallback { .. }
    )));
}

#[test]
fn single_variant_fallback_is_silent() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(&["Câu", "134", "Đáp án"], &[&["Câu 1", "CLO1", "A"]]);
    let mut diags = Vec::new();
    build_answer_key(&table, &points, &mut diags).unwrap();
    assert!(diags.is_empty());
}

#[test]
fn variant_without_answer_column_is_unscorable() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(
        &["Câu", "134", "210", "Đáp án_134", "Đáp án_999"],
        &[&["Câu 1", "CLO1", "CLO1", "A", "B"]],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    let orphan = key.entries.iter().find(|e| e.variant == "210").unwrap();
    assert_eq!(orphan.answer, "");
    assert!(diags.contains(&Diagnostic::UnscorableVariant {
        variant: "210".to_string()
    }));
}

#[test]
fn no_variant_columns_is_a_configuration_error() {
    let points = HashMap::new();
    let table = key_table(&["Câu", "Đáp án"], &[&["Câu 1", "A"]]);
    let mut diags = Vec::new();
    let err = build_answer_key(&table, &points, &mut diags).unwrap_err();
    assert!(matches!(err, GradeError::Configuration(_)));
}

#[test]
fn nan_cells_are_treated_as_empty() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(
        &["Câu", "134", "Đáp án_134"],
        &[&["Câu 1", "nan", "A"], &["Câu 2", "CLO1", "NaN"]],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    assert_eq!(key.entries[0].outcome, "");
    assert_eq!(key.entries[1].answer, "");
    assert!(diags.is_empty());
}

#[test]
fn max_achievable_takes_best_variant() {
    let points =
        build_point_table(&points_table(&[("CLO1", "2"), ("CLO2", "3")])).unwrap();
    let table = key_table(
        &["Câu", "134", "210", "Đáp án_134", "Đáp án_210"],
        &[
            &["Câu 1", "CLO1", "CLO2", "A", "B"],
            &["Câu 2", "CLO1", "CLO2", "C", "D"],
        ],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    // variant 134 totals 4, variant 210 totals 6
    assert_eq!(key.max_achievable(), 6.0);
}

#[test]
fn question_keys_dedup_in_order() {
    let points = build_point_table(&points_table(&[("CLO1", "2")])).unwrap();
    let table = key_table(
        &["Câu", "134", "Đáp án_134"],
        &[&["Câu 2", "CLO1", "A"], &["Câu 1", "CLO1", "B"]],
    );
    let mut diags = Vec::new();
    let key = build_answer_key(&table, &points, &mut diags).unwrap();
    assert_eq!(key.question_keys(), ["cau2", "cau1"]);
}
