//! Reordering of the complete race sheet after a reference sheet.
//!
//! Rows are joined on their first column (trimmed, case-sensitive). Matched
//! rows follow the reference order. Unmatched rows go last, in their original
//! relative order. Row text is never rewritten.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BOM: &str = "\u{feff}";

/// First-column values that mark repeated header rows in the reference sheet.
pub const HEADER_KEYS: [&str; 2] = ["Japanese", "Name"];

/// A file split into lines, remembering how to write it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFile {
    pub has_bom: bool,
    pub line_ending: &'static str,
    pub header: String,
    pub rows: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSummary {
    pub total: usize,
    pub matched: usize,
}

impl ReorderSummary {
    pub fn unmatched(&self) -> usize {
        self.total - self.matched
    }
}

fn read_text(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// First CSV field of a single line, trimmed. Empty when nothing parses.
pub fn line_key(line: &str) -> String {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(Result::ok)
        .and_then(|record| record.get(0).map(|f| f.trim().to_string()))
        .unwrap_or_default()
}

/// Key → earliest row position in the reference sheet.
pub fn reference_order(text: &str) -> AppResult<HashMap<String, usize>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut order = HashMap::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let key = record.get(0).unwrap_or("").trim();
        if key.is_empty() || HEADER_KEYS.contains(&key) {
            continue;
        }
        order.entry(key.to_string()).or_insert(idx);
    }

    Ok(order)
}

/// Split the complete sheet into header line and data lines.
pub fn split_lines(text: &str, source: &str) -> AppResult<LineFile> {
    let has_bom = text.starts_with(BOM);
    let body = text.strip_prefix(BOM).unwrap_or(text);
    let line_ending = if body.contains("\r\n") { "\r\n" } else { "\n" };

    let mut lines = body.lines().map(str::to_string);
    let header = lines
        .next()
        .ok_or_else(|| AppError::EmptyInput(source.to_string()))?;

    Ok(LineFile {
        has_bom,
        line_ending,
        header,
        rows: lines.collect(),
    })
}

/// Data lines in their new order, plus how many matched the reference.
pub fn reorder_rows<'a>(order: &HashMap<String, usize>, rows: &'a [String]) -> (Vec<&'a str>, usize) {
    let mut keyed = rows
        .iter()
        .map(|line| (order.get(&line_key(line)).copied(), line.as_str()))
        .collect::<Vec<_>>();

    let matched = keyed.iter().filter(|(pos, _)| pos.is_some()).count();

    // Stable sort: ties keep their original order.
    keyed.sort_by_key(|(pos, _)| match pos {
        Some(p) => (0, *p),
        None => (1, 0),
    });

    (keyed.into_iter().map(|(_, line)| line).collect(), matched)
}

pub fn render(file: &LineFile, rows: &[&str]) -> String {
    let mut out = String::new();
    if file.has_bom {
        out.push_str(BOM);
    }
    for line in std::iter::once(file.header.as_str()).chain(rows.iter().copied()) {
        out.push_str(line);
        out.push_str(file.line_ending);
    }
    out
}

pub struct ReorderLogic;

impl ReorderLogic {
    pub fn run(sorted: &Path, complete: &Path, output: &Path, verbose: bool) -> AppResult<ReorderSummary> {
        let reference = read_text(sorted)?;
        let complete_text = read_text(complete)?;

        let order = reference_order(&reference)?;
        let file = split_lines(&complete_text, &complete.display().to_string())?;
        let (rows, matched) = reorder_rows(&order, &file.rows);

        fs::write(output, render(&file, &rows))?;

        let summary = ReorderSummary {
            total: file.rows.len(),
            matched,
        };

        success(format!("Sorted rows written: {}", output.display()));
        if verbose {
            info(format!("Matched by name: {} / {}", summary.matched, summary.total));
            if summary.unmatched() > 0 {
                warning(format!("Unmatched (appended at end): {}", summary.unmatched()));
            }
        }

        Ok(summary)
    }
}
