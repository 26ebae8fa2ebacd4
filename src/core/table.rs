//! Reading the race sheet and locating its real header row.

use crate::errors::{AppError, AppResult};
use crate::models::table::EXPECTED_HEADERS;
use crate::models::{HeaderSet, RawRow};
use crate::utils::normalize_cell;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Rows inspected when looking for the header.
pub const HEADER_LOOKAHEAD: usize = 10;
/// Expected labels a row must carry to count as the header.
pub const HEADER_MIN_MATCHES: usize = 3;

/// A sheet split into its header and the data rows that follow it.
#[derive(Debug, Clone)]
pub struct Table {
    pub header: HeaderSet,
    pub rows: Vec<RawRow>,
}

/// Read a delimited file into normalized cell rows.
///
/// Decoding is lossy UTF-8 with a leading BOM stripped. Fails with
/// `FileNotFound` when the path does not exist.
pub fn read_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_rows(&text)
}

pub fn parse_rows(text: &str) -> AppResult<Vec<Vec<String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(normalize_cell).collect());
    }

    Ok(rows)
}

/// Number of distinct expected labels present in `row`.
fn expected_label_hits(row: &[String]) -> usize {
    let cells: HashSet<&str> = row.iter().map(String::as_str).collect();
    EXPECTED_HEADERS
        .iter()
        .filter(|label| cells.contains(*label))
        .count()
}

/// Index of the header row: the first of the leading rows matching enough
/// expected labels, or 0 when none does.
pub fn find_header_index(rows: &[Vec<String>]) -> usize {
    rows.iter()
        .take(HEADER_LOOKAHEAD)
        .position(|row| expected_label_hits(row) >= HEADER_MIN_MATCHES)
        .unwrap_or(0)
}

/// Split raw rows into header and padded/truncated data rows.
/// Rows above the header are dropped.
pub fn discover_header(mut rows: Vec<Vec<String>>, source: &str) -> AppResult<Table> {
    if rows.is_empty() {
        return Err(AppError::EmptyInput(source.to_string()));
    }

    let idx = find_header_index(&rows);
    let data = rows.split_off(idx + 1);
    let header = HeaderSet::new(rows.swap_remove(idx));

    let rows = data
        .into_iter()
        .map(|cells| RawRow::from_cells(&header, cells))
        .collect();

    Ok(Table { header, rows })
}

/// `read_rows` followed by `discover_header`.
pub fn load_table(path: &Path) -> AppResult<Table> {
    let rows = read_rows(path)?;
    discover_header(rows, &path.display().to_string())
}
