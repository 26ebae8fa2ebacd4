// src/export/races_js.rs

use crate::errors::AppResult;
use crate::models::RaceRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Global the page reads the race list from.
pub const RACES_VAR: &str = "window.RACES";
pub const RACES_META_VAR: &str = "window.RACES_META";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RacesMeta {
    pub generated_at: String,
    pub source: String,
    pub count: usize,
}

impl RacesMeta {
    pub fn new(generated_at: DateTime<Utc>, source: &str, count: usize) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            source: source.to_string(),
            count,
        }
    }
}

/// Render the two assignment statements loaded by the page from `file://`.
///
/// JSON is pretty-printed with two-space indentation; non-ASCII text is
/// written as-is.
pub fn render_races_js(races: &[RaceRecord], meta: &RacesMeta) -> AppResult<String> {
    let races_json = serde_json::to_string_pretty(races)?;
    let meta_json = serde_json::to_string_pretty(meta)?;

    Ok(format!(
        "{RACES_VAR} = {races_json};\n{RACES_META_VAR} = {meta_json};\n"
    ))
}

pub fn write_races_js(path: &Path, content: &str) -> AppResult<()> {
    fs::write(path, content)?;
    super::notify_export_success("Race data", path);
    Ok(())
}
