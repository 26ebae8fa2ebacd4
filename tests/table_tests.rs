mod common;

use common::{HEADER, table_from};
use racegen::core::table::{discover_header, find_header_index, parse_rows, read_rows};
use racegen::errors::AppError;
use racegen::models::{HeaderSet, RawRow};
use racegen::utils::normalize_cell;
use std::path::Path;

#[test]
fn test_decorative_first_row_is_skipped() {
    let text = format!("Race list,Name,,\n{HEADER}\n有馬記念,Arima Kinen");
    let table = table_from(&text);

    assert_eq!(table.header.labels()[0], "Name");
    assert_eq!(table.header.len(), 13);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].text("En name"), "Arima Kinen");
}

#[test]
fn test_first_row_selected_when_it_qualifies() {
    let text = "Name,Grade,Month\n有馬記念,G1,12\n";
    let rows = parse_rows(text).unwrap();
    assert_eq!(find_header_index(&rows), 0);

    let table = discover_header(rows, "inline").unwrap();
    assert_eq!(table.header.labels(), ["Name", "Grade", "Month"]);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_two_matches_are_not_enough() {
    let text = "Name,Grade,Foo\nName,Grade,Month\n";
    let rows = parse_rows(text).unwrap();
    assert_eq!(find_header_index(&rows), 1);
}

#[test]
fn test_header_beyond_lookahead_falls_back_to_first_row() {
    let mut lines = vec!["junk".to_string(); 10];
    lines.push(HEADER.to_string());
    let rows = parse_rows(&lines.join("\n")).unwrap();

    assert_eq!(find_header_index(&rows), 0);
    let table = discover_header(rows, "inline").unwrap();
    assert_eq!(table.header.labels(), ["junk"]);
    assert_eq!(table.rows.len(), 10);
}

#[test]
fn test_empty_input_is_an_error() {
    let rows = parse_rows("\u{feff}").unwrap();
    assert!(rows.is_empty());

    let err = discover_header(rows, "empty.csv").unwrap_err();
    assert!(matches!(err, AppError::EmptyInput(ref s) if s == "empty.csv"));
}

#[test]
fn test_missing_file_is_reported() {
    let err = read_rows(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, AppError::FileNotFound(_)));
}

#[test]
fn test_cells_are_normalized() {
    assert_eq!(normalize_cell("\u{feff}  En\u{a0}\u{a0}name "), "En name");
    assert_eq!(normalize_cell("有馬\u{200b}記念"), "有馬記念");
    assert_eq!(normalize_cell("a \t b\n c"), "a b c");
    assert_eq!(normalize_cell(""), "");
}

#[test]
fn test_bom_and_nbsp_header_still_matches() {
    let text = "\u{feff}Name,En\u{a0}name, Grade ,Month\nx,y,G1,3\n";
    let table = table_from(text);
    assert_eq!(table.header.labels(), ["Name", "En name", "Grade", "Month"]);
}

#[test]
fn test_short_rows_are_padded_and_long_rows_truncated() {
    let text = "Name,Grade,Month\nshort\nlong,G2,4,extra,more\n";
    let table = table_from(text);

    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[0].text("Grade"), "");
    assert_eq!(table.rows[0].text("Month"), "");
    assert_eq!(table.rows[1].len(), 3);
    assert_eq!(table.rows[1].text("Month"), "4");
}

#[test]
fn test_duplicate_label_last_occurrence_wins() {
    let header = HeaderSet::new(vec!["Name".into(), "Grade".into(), "Name".into()]);
    let row = RawRow::from_cells(&header, vec!["first".into(), "G1".into(), "second".into()]);

    assert_eq!(row.get("Name"), Some("second"));
    assert_eq!(row.get("Missing"), None);
    assert_eq!(row.text("Missing"), "");

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["Name"], "second");
    assert_eq!(json.as_object().unwrap().len(), 2);
}
