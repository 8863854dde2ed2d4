use super::*;
use std::fs;

#[test]
fn from_csv_reader_basic() {
    let data = "MSSV,Ten,De\n001,An,134\n002,Binh,210\n";
    let table = Table::from_csv_reader(data.as_bytes()).unwrap();
    assert_eq!(table.headers(), ["MSSV", "Ten", "De"]);
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert_eq!(table.cell(0, 0), "001");
    assert_eq!(table.cell(1, 2), "210");
}

#[test]
fn from_csv_reader_trims_cells() {
    let data = "A,B\n  x  , y\n";
    let table = Table::from_csv_reader(data.as_bytes()).unwrap();
    assert_eq!(table.cell(0, 0), "x");
    assert_eq!(table.cell(0, 1), "y");
}

#[test]
fn ragged_rows_are_padded() {
    let data = "A,B,C\n1,2\n1,2,3,4\n";
    let table = Table::from_csv_reader(data.as_bytes()).unwrap();
    assert_eq!(table.cell(0, 2), "");
    assert_eq!(table.cell(1, 2), "3");
}

#[test]
fn find_column_matches_first() {
    let table = Table::new(
        vec!["MSSV".into(), "De".into(), "Cau 1".into()],
        vec![],
    );
    let idx = table.find_column(|h| h.contains("De"));
    assert_eq!(idx, Some(1));
    assert_eq!(table.find_column(|h| h == "missing"), None);
}

#[test]
fn write_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(
        &path,
        &["MSSV".to_string(), "Total".to_string()],
        vec![vec!["001".to_string(), "7.5".to_string()]].into_iter(),
    )
    .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("MSSV,Total"));
    let table = Table::from_csv_path(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.cell(0, 1), "7.5");
}
