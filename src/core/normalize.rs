//! Per-row normalization: one `RawRow` in, one `RaceRecord` out.

use crate::core::eligibility;
use crate::core::mapping::{
    convert_direction, convert_grade, convert_surface, convert_venue, resolve_half,
    resolve_month, season_for,
};
use crate::core::table::Table;
use crate::models::table::columns;
use crate::models::{MediaRef, RaceRecord, RawRow};
use crate::utils::link_tail;

/// Folder the page loads local race images from.
pub const IMAGE_DIR: &str = "race_images";

/// Watches rows as they are normalized. Observers only read; they cannot
/// change what the normalizer produces.
pub trait RowObserver {
    /// `index` is the 0-based position of the row among the data rows.
    fn observe(&mut self, index: usize, raw: &RawRow, record: &RaceRecord);
}

/// Translated name, taken from the unlabelled column when the sheet has no
/// `En name` column at all.
fn translated_name(row: &RawRow) -> &str {
    row.get(columns::EN_NAME)
        .unwrap_or_else(|| row.text(columns::UNLABELLED))
}

fn media_ref(link: &str) -> Option<MediaRef> {
    if link.is_empty() {
        return None;
    }

    Some(MediaRef {
        image: format!("{}/{}", IMAGE_DIR, link_tail(link)),
        image_remote: link.to_string(),
    })
}

pub fn normalize_row(id: u32, row: &RawRow) -> RaceRecord {
    let name_jp = row.text(columns::NAME).to_string();
    let translated = translated_name(row);
    let name = if translated.is_empty() {
        name_jp.clone()
    } else {
        translated.to_string()
    };

    let month = resolve_month(row.text(columns::MONTH));
    let flags = eligibility::resolve(row);

    RaceRecord {
        id,
        name,
        name_jp,
        grade: convert_grade(row.text(columns::GRADE)),
        distance: row.text(columns::DISTANCE).to_string(),
        surface: convert_surface(row.text(columns::GROUND)),
        venue: convert_venue(row.text(columns::LOCATION)),
        junior: flags.junior,
        classics: flags.classics,
        senior: flags.senior,
        month,
        half: resolve_half(row.text(columns::HALF)),
        direction: convert_direction(
            row.text(columns::DIRECTION),
            row.text(columns::INNER_OUTER),
        ),
        season: season_for(month),
        media: media_ref(row.text(columns::IMAGE_LINK)),
    }
}

/// Normalize every data row in order, ids starting at 1.
pub fn normalize_rows(
    table: &Table,
    mut observer: Option<&mut dyn RowObserver>,
) -> Vec<RaceRecord> {
    let mut records = Vec::with_capacity(table.rows.len());

    for (index, row) in table.rows.iter().enumerate() {
        let record = normalize_row(index as u32 + 1, row);

        if let Some(obs) = observer.as_deref_mut() {
            obs.observe(index, row, &record);
        }

        records.push(record);
    }

    records
}
