mod common;

use common::{rgen, sample_csv, table_from, temp_dir, write_file};
use predicates::str::contains;
use racegen::core::fetch::{
    FetchLogic, FetchOptions, FetchSummary, ImageSource, file_name_for, image_links,
};
use racegen::errors::{AppError, AppResult};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Serves fixed bytes, failing for any URL containing "broken"
#[derive(Default)]
struct FakeSource {
    requested: RefCell<Vec<String>>,
}

impl ImageSource for FakeSource {
    fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        self.requested.borrow_mut().push(url.to_string());
        if url.contains("broken") {
            return Err(AppError::Io(std::io::Error::other("connection reset")));
        }
        Ok(url.as_bytes().to_vec())
    }
}

fn options(dir: PathBuf) -> FetchOptions {
    FetchOptions {
        dir,
        delay: Duration::ZERO,
    }
}

#[test]
fn test_links_come_from_image_column() {
    let table = table_from(&sample_csv());
    let links = image_links(&table);

    assert_eq!(
        links,
        vec![
            (1, "https://img.example.com/races/arima.png".to_string()),
            (2, "https://img.example.com/races/derby.png".to_string()),
        ]
    );
}

#[test]
fn test_links_fall_back_to_last_column() {
    let table = table_from("Name,Grade,Month,Picture\na,G1,1,http://h/a.png\nb,G2,2,\n");
    assert_eq!(image_links(&table), vec![(1, "http://h/a.png".to_string())]);
}

#[test]
fn test_file_name_is_last_path_segment() {
    assert_eq!(file_name_for("https://h/x/y/z.png?size=2").unwrap(), "z.png");
    assert!(matches!(file_name_for("https://h/dir/"), Err(AppError::InvalidUrl(_))));
    assert!(matches!(file_name_for("not a url"), Err(AppError::InvalidUrl(_))));
}

#[test]
fn test_fetch_downloads_skips_and_counts_failures() {
    let dir = temp_dir("fetch_batch").join("images");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("existing.png"), b"old").unwrap();

    let links = vec![
        (1, "https://h/a.png".to_string()),
        (2, "https://h/existing.png".to_string()),
        (3, "https://h/broken.png".to_string()),
        (4, "https://h/".to_string()),
        (5, "https://h/b.png".to_string()),
    ];
    let source = FakeSource::default();

    let summary = FetchLogic::fetch_all(&links, &options(dir.clone()), &source).unwrap();

    assert_eq!(
        summary,
        FetchSummary {
            downloaded: 2,
            skipped: 1,
            failed: 2,
        }
    );
    assert_eq!(summary.total(), 5);
    assert_eq!(fs::read(dir.join("a.png")).unwrap(), b"https://h/a.png");
    assert_eq!(fs::read(dir.join("existing.png")).unwrap(), b"old");
    assert!(!dir.join("broken.png").exists());

    // the existing file and the URL without a file name never hit the source
    assert_eq!(
        *source.requested.borrow(),
        vec!["https://h/a.png", "https://h/broken.png", "https://h/b.png"]
    );
}

#[test]
fn test_fetch_is_idempotent() {
    let dir = temp_dir("fetch_twice");
    let input = write_file(&dir, "RaceComplete.csv", &sample_csv());
    let opts = options(dir.join("race_images"));
    let source = FakeSource::default();

    let first = FetchLogic::run(&input, &opts, &source).unwrap();
    assert_eq!(first.downloaded, 2);

    let second = FetchLogic::run(&input, &opts, &source).unwrap();
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!(source.requested.borrow().len(), 2);
}

#[test]
fn test_fetch_missing_csv_is_an_error() {
    let dir = temp_dir("fetch_missing");
    let source = FakeSource::default();

    let err = FetchLogic::run(&dir.join("nope.csv"), &options(dir.join("img")), &source).unwrap_err();
    assert!(matches!(err, AppError::FileNotFound(_)));
}

#[test]
fn test_cli_reports_data_rows_and_summary() {
    let dir = temp_dir("fetch_cli_report");
    let input = write_file(
        &dir,
        "RaceComplete.csv",
        "Name,Grade,Month,Image Link\na,G1,1,\nb,G2,2,not a url\n",
    );
    let images = dir.join("img");

    rgen()
        .args([
            "--config",
            dir.join("none.conf").to_str().unwrap(),
            "fetch-images",
            "--input",
            input.to_str().unwrap(),
            "--dir",
            images.to_str().unwrap(),
            "--delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stderr(contains("Data row 2: Invalid URL: not a url"))
        .stdout(contains("Race image download"))
        .stdout(contains("Failed:"))
        .stdout(contains("Total processed:"));

    assert!(images.is_dir());
}
