#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use racegen::core::table::{Table, discover_header, parse_rows};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Name,En name,Grade,Location,Ground,Distance,Direction,Inner/Outer,Month,Half,Year,Year No,Image Link";

pub fn rgen() -> Command {
    cargo_bin_cmd!("racegen")
}

/// Fresh per-test directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("racegen_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &PathBuf, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

/// Parse CSV text the same way `generate` does
pub fn table_from(text: &str) -> Table {
    let rows = parse_rows(text).expect("parse rows");
    discover_header(rows, "inline").expect("discover header")
}

/// Small sheet with a decorative first row, as exported from the spreadsheet
pub fn sample_csv() -> String {
    [
        "Race list,,,,,,,,,,,,",
        HEADER,
        "有馬記念,Arima Kinen,G1,中山,芝,2500,右,内,12,後半,シニア級,3,https://img.example.com/races/arima.png",
        "日本ダービー,Tokyo Yushun,G1,東京,芝,2400,左,,5,後半,クラシック級,,https://img.example.com/races/derby.png",
        "アイビスサマーダッシュ,,G3,新潟,芝,1000,,線,7,前半,,3,",
    ]
    .join("\n")
}

/// Split a generated races.js into its two JSON payloads
pub fn parse_races_js(script: &str) -> (Value, Value) {
    let body = script
        .strip_prefix("window.RACES = ")
        .expect("races assignment first");
    let (races, meta) = body
        .split_once(";\nwindow.RACES_META = ")
        .expect("meta assignment second");
    let meta = meta.strip_suffix(";\n").expect("trailing semicolon");

    (
        serde_json::from_str(races).expect("races json"),
        serde_json::from_str(meta).expect("meta json"),
    )
}
