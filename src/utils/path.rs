//! Path helpers: base names of local files and trailing segments of links.

use std::path::Path;

/// Base name of a local file, as shown in the generated metadata.
pub fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Text after the last '/' of a link (the whole link when it has none).
pub fn link_tail(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}
