// src/export/mod.rs

pub mod races_js;

pub use races_js::{RacesMeta, render_races_js, write_races_js};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for written artifacts.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
