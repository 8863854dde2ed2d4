/// Generic tabular data: named columns over untyped string cells.
///
/// This is the boundary the scoring pipeline works against — the core
/// never sees file paths or storage formats, only `Table` values. CSV
/// loading and writing live here so the pipeline stays format-agnostic.
use std::io::Read;
use std::path::Path;

use crate::grade::diag::GradeError;

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from headers and rows. Short rows are padded with
    /// empty cells; long rows are truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Table { headers, rows }
    }

    /// Read a CSV file into a table. Cells are trimmed on read.
    pub fn from_csv_path(path: &Path) -> Result<Table, GradeError> {
        let file = std::fs::File::open(path)?;
        Table::from_csv_reader(file)
    }

    /// Read CSV from any reader. Tolerates ragged rows (missing trailing
    /// cells become empty strings).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Table, GradeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Table::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column whose header matches `pred`.
    pub fn find_column(&self, pred: impl Fn(&str) -> bool) -> Option<usize> {
        self.headers.iter().position(|h| pred(h))
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Write headers + rows as a CSV file.
pub fn write_csv(
    path: &Path,
    headers: &[String],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<(), GradeError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
