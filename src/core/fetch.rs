//! Download of the race images referenced by the sheet.

use crate::core::table::{Table, load_table};
use crate::errors::{AppError, AppResult};
use crate::models::table::columns;
use crate::ui::messages::{error, header, info, skipped, success, tally};
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use url::Url;

/// Where image bytes come from. The HTTP client in production, a fake in tests.
pub trait ImageSource {
    fn fetch(&self, url: &str) -> AppResult<Vec<u8>>;
}

pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("racegen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub dir: PathBuf,
    /// Pause after every download attempt
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl FetchSummary {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}

/// Non-empty image links with their 1-based data row number (first row
/// below the header is 1).
///
/// Uses the `Image Link` column, or the last column when the header has none.
pub fn image_links(table: &Table) -> Vec<(usize, String)> {
    let has_column = table.header.contains(columns::IMAGE_LINK);

    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let link = if has_column {
                row.text(columns::IMAGE_LINK)
            } else {
                row.fields().last().map(|(_, v)| v.as_str()).unwrap_or("")
            };
            (!link.is_empty()).then(|| (i + 1, link.to_string()))
        })
        .collect()
}

/// Last path segment of `link`, used as the local file name.
pub fn file_name_for(link: &str) -> AppResult<String> {
    let url = Url::parse(link).map_err(|e| AppError::InvalidUrl(format!("{link}: {e}")))?;

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidUrl(format!("{link}: no file name in path")))
}

pub struct FetchLogic;

impl FetchLogic {
    pub fn run(input: &Path, opts: &FetchOptions, source: &dyn ImageSource) -> AppResult<FetchSummary> {
        let table = load_table(input)?;
        let links = image_links(&table);
        info(format!("Found {} image links in {}", links.len(), input.display()));

        let summary = Self::fetch_all(&links, opts, source)?;
        Self::print_summary(&summary, &opts.dir);
        Ok(summary)
    }

    /// Fetch every link into `opts.dir`. Existing files are skipped and
    /// per-item failures are counted without stopping the batch.
    pub fn fetch_all(
        links: &[(usize, String)],
        opts: &FetchOptions,
        source: &dyn ImageSource,
    ) -> AppResult<FetchSummary> {
        fs::create_dir_all(&opts.dir)?;

        let mut summary = FetchSummary::default();

        for (row, link) in links {
            let name = match file_name_for(link) {
                Ok(name) => name,
                Err(e) => {
                    error(format!("Data row {row}: {e}"));
                    summary.failed += 1;
                    continue;
                }
            };

            let target = opts.dir.join(&name);
            if target.exists() {
                skipped(format!("Data row {row}: {name} already exists"));
                summary.skipped += 1;
                continue;
            }

            match Self::download(source, link, &target) {
                Ok(()) => {
                    success(format!("Data row {row}: downloaded {name}"));
                    summary.downloaded += 1;
                }
                Err(e) => {
                    error(format!("Data row {row}: failed to download {link}: {e}"));
                    summary.failed += 1;
                }
            }

            if !opts.delay.is_zero() {
                thread::sleep(opts.delay);
            }
        }

        Ok(summary)
    }

    fn download(source: &dyn ImageSource, link: &str, target: &Path) -> AppResult<()> {
        let bytes = source.fetch(link)?;
        fs::write(target, bytes)?;
        Ok(())
    }

    fn print_summary(summary: &FetchSummary, dir: &Path) {
        header("Race image download");
        tally("Downloaded", summary.downloaded);
        tally("Skipped (already on disk)", summary.skipped);
        tally("Failed", summary.failed);
        tally("Total processed", summary.total());
        info(format!("Images saved in: {}/", dir.display()));
    }
}
