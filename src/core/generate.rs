use crate::core::debug::{self, SampleCollector};
use crate::core::normalize::{RowObserver, normalize_rows};
use crate::core::table::{Table, load_table};
use crate::errors::AppResult;
use crate::export::{RacesMeta, render_races_js, write_races_js};
use crate::ui::messages::info;
use crate::utils::file_base_name;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Outcome of one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub count: usize,
    pub debug_written: bool,
}

pub struct GenerateLogic;

impl GenerateLogic {
    /// Read `input`, normalize every row and write the race script to `output`.
    ///
    /// Nothing is written when the input is missing or empty. The diagnostic
    /// dump (when `debug` is set) is best-effort and never fails the run.
    pub fn run(input: &Path, output: &Path, debug: Option<&Path>) -> AppResult<GenerateSummary> {
        let table = load_table(input)?;
        let source = file_base_name(input);

        info(format!(
            "Header: {} columns, {} data rows",
            table.header.len(),
            table.rows.len()
        ));

        let mut collector = debug.map(|_| SampleCollector::default());
        let observer = collector.as_mut().map(|c| c as &mut dyn RowObserver);

        let script = Self::render(&table, &source, Utc::now(), observer)?;
        write_races_js(output, &script)?;

        let mut debug_written = false;
        if let (Some(path), Some(collector)) = (debug, collector) {
            let dump = collector.into_dump(&source, &table.header);
            debug_written = debug::write_best_effort(path, &dump);
        }

        Ok(GenerateSummary {
            count: table.rows.len(),
            debug_written,
        })
    }

    /// Pure part of the run: normalized records rendered with a given timestamp.
    pub fn render(
        table: &Table,
        source: &str,
        generated_at: DateTime<Utc>,
        observer: Option<&mut dyn RowObserver>,
    ) -> AppResult<String> {
        let races = normalize_rows(table, observer);
        let meta = RacesMeta::new(generated_at, source, races.len());
        render_races_js(&races, &meta)
    }
}
