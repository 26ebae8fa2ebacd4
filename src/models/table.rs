use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Column labels of the race metadata sheet.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const EN_NAME: &str = "En name";
    /// Unlabelled column some exports use for the translated name
    pub const UNLABELLED: &str = "";
    pub const GRADE: &str = "Grade";
    pub const LOCATION: &str = "Location";
    pub const GROUND: &str = "Ground";
    pub const DISTANCE: &str = "Distance";
    pub const DIRECTION: &str = "Direction";
    pub const INNER_OUTER: &str = "Inner/Outer";
    pub const MONTH: &str = "Month";
    pub const HALF: &str = "Half";
    pub const YEAR: &str = "Year";
    pub const YEAR_NO: &str = "Year No";
    pub const IMAGE_LINK: &str = "Image Link";
}

/// Labels a real header row is expected to carry.
pub const EXPECTED_HEADERS: [&str; 13] = [
    columns::NAME,
    columns::EN_NAME,
    columns::GRADE,
    columns::LOCATION,
    columns::GROUND,
    columns::DISTANCE,
    columns::DIRECTION,
    columns::INNER_OUTER,
    columns::MONTH,
    columns::HALF,
    columns::YEAR,
    columns::YEAR_NO,
    columns::IMAGE_LINK,
];

/// Ordered labels of the discovered header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderSet {
    labels: Vec<String>,
}

impl HeaderSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// One data row keyed by header label.
///
/// Always holds exactly `header.len()` fields. Short rows are padded with
/// empty strings and long rows are truncated. When a label is repeated, the
/// last occurrence wins on lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn from_cells(header: &HeaderSet, mut cells: Vec<String>) -> Self {
        cells.resize(header.len(), String::new());

        let fields = header
            .labels()
            .iter()
            .cloned()
            .zip(cells)
            .collect::<Vec<_>>();

        Self { fields }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Cell value, or "" when the column is absent.
    pub fn text(&self, label: &str) -> &str {
        self.get(label).unwrap_or("")
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn is_last_occurrence(&self, idx: usize) -> bool {
        let label = &self.fields[idx].0;
        !self.fields[idx + 1..].iter().any(|(l, _)| l == label)
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let visible = (0..self.fields.len())
            .filter(|&i| self.is_last_occurrence(i))
            .collect::<Vec<_>>();

        let mut map = serializer.serialize_map(Some(visible.len()))?;
        for i in visible {
            let (label, value) = &self.fields[i];
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
