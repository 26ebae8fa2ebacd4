//! Fixed lookup tables turning sheet labels into tracker values.
//!
//! Every table is consulted through [`lookup`], so a label missing from a
//! table is passed through unchanged instead of being rejected.

use crate::models::Season;

pub type LookupTable = &'static [(&'static str, &'static str)];

pub const GRADES: LookupTable = &[
    ("G1", "GI"),
    ("G2", "GII"),
    ("G3", "GIII"),
    ("OP", "Open"),
    ("Pre-OP", "Pre-OP"),
];

pub const SURFACES: LookupTable = &[("芝", "turf"), ("ダート", "dirt")];

pub const VENUES: LookupTable = &[
    ("東京", "Tokyo"),
    ("中山", "Nakayama (Chiba)"),
    ("京都", "Kyoto"),
    ("阪神", "Hanshin (Takarazuka)"),
    ("中京", "Chukyou (Nagoya)"),
    ("小倉", "Kokura (Kitakyushu)"),
    ("札幌", "Sapporo"),
    ("函館", "Hakodate"),
    ("新潟", "Niigata"),
    ("福島", "Fukushima"),
    ("川崎", "Kawasaki"),
    ("大井", "Ooi"),
    ("船橋", "Funabashi"),
    ("盛岡", "Morioka"),
];

pub const DIRECTIONS: LookupTable = &[("右", "right"), ("左", "left"), (STRAIGHT, "straight")];

/// Full "straight course" token.
pub const STRAIGHT: &str = "直線";
/// Short form of [`STRAIGHT`] found in the direction column.
pub const STRAIGHT_ABBREV: &str = "直";
/// Inner/outer marker meaning the course is the straight line.
pub const LINE_MARKER: &str = "線";

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const FIRST_HALF: &str = "1st";
pub const SECOND_HALF: &str = "2nd";
pub const HALVES: LookupTable = &[("前半", FIRST_HALF), ("後半", SECOND_HALF)];

/// Exact-match lookup; unknown keys come back as-is.
pub fn lookup(table: LookupTable, raw: &str) -> String {
    table
        .iter()
        .find(|(k, _)| *k == raw)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn convert_grade(raw: &str) -> String {
    lookup(GRADES, raw)
}

pub fn convert_surface(raw: &str) -> String {
    lookup(SURFACES, raw)
}

pub fn convert_venue(raw: &str) -> String {
    lookup(VENUES, raw)
}

/// Resolve the course direction.
///
/// The abbreviation `直`, or an empty direction with the `線` marker in the
/// inner/outer column, both fold into `直線` before the table lookup.
pub fn convert_direction(raw: &str, inner_outer: &str) -> String {
    let folded = if raw == STRAIGHT_ABBREV || (raw.is_empty() && inner_outer == LINE_MARKER) {
        STRAIGHT
    } else {
        raw
    };
    lookup(DIRECTIONS, folded)
}

/// Month number from the sheet, tolerating a trailing `月`.
/// Unparseable input gives 1; every integer, however large, is clamped
/// into 1..=12.
pub fn month_number(raw: &str) -> u32 {
    let digits = raw.trim().strip_suffix('月').unwrap_or(raw.trim()).trim();
    let n = digits.parse::<i64>().unwrap_or_else(|_| overflow_bound(digits));
    n.clamp(1, 12) as u32
}

/// Integers too wide for i64 still clamp by sign; anything else is 1.
fn overflow_bound(digits: &str) -> i64 {
    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits)),
    };

    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }
    if negative { i64::MIN } else { i64::MAX }
}

pub fn month_name(number: u32) -> &'static str {
    let idx = number.clamp(1, 12) as usize - 1;
    MONTHS[idx]
}

pub fn resolve_month(raw: &str) -> &'static str {
    month_name(month_number(raw))
}

/// `前半` / `後半`; anything else is the first half.
pub fn resolve_half(raw: &str) -> &'static str {
    HALVES
        .iter()
        .find(|(k, _)| *k == raw)
        .map(|(_, v)| *v)
        .unwrap_or(FIRST_HALF)
}

/// Season per month, January first.
pub const SEASONS: [Season; 12] = [
    Season::Winter,
    Season::Winter,
    Season::Spring,
    Season::Spring,
    Season::Spring,
    Season::Summer,
    Season::Summer,
    Season::Summer,
    Season::Autumn,
    Season::Autumn,
    Season::Autumn,
    Season::Winter,
];

/// Season of an English month name. Unknown names count as spring.
pub fn season_for(month: &str) -> Season {
    MONTHS
        .iter()
        .position(|m| *m == month)
        .map(|idx| SEASONS[idx])
        .unwrap_or(Season::Spring)
}
