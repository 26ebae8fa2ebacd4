//! Cell text cleanup shared by header labels and data cells.

const BOM: char = '\u{feff}';
const ZERO_WIDTH_SPACE: char = '\u{200b}';
const NBSP: char = '\u{a0}';

/// Strip BOMs and zero-width spaces, turn NBSP into a plain space, trim,
/// and collapse internal whitespace runs to a single space.
pub fn normalize_cell(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != BOM && *c != ZERO_WIDTH_SPACE)
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
