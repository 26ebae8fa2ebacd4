use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

/// Local copy and remote origin of a race image. Only ever built as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRef {
    pub image: String,
    #[serde(rename = "imageRemote")]
    pub image_remote: String,
}

/// One normalized race, in the shape the tracker page reads from `window.RACES`.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "nameJP")]
    pub name_jp: String,
    #[serde(rename = "type")]
    pub grade: String,
    #[serde(rename = "length")]
    pub distance: String,
    pub surface: String,
    #[serde(rename = "racetrack")]
    pub venue: String,
    pub junior: bool,
    pub classics: bool,
    pub senior: bool,
    pub month: &'static str,
    pub half: &'static str,
    pub direction: String,
    pub season: Season,
    #[serde(flatten)]
    pub media: Option<MediaRef>,
}
