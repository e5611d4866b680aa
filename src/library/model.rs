use std::cmp::Ordering;

use serde::Serialize;

/// Column headers, in output order.
pub const COLUMNS: [&str; 8] = [
    "Artist", "Title", "Duration", "Album", "Track", "Genre", "Filename", "Comment",
];

/// One scanned file. Everything but `filename` comes from the tags and may be missing.
///
/// Serializes with the headers from [`COLUMNS`], in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    #[serde(rename = "Artist")]
    pub artist: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// Formatted as `MM:SS`.
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Album")]
    pub album: Option<String>,
    #[serde(rename = "Track")]
    pub track: Option<u32>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// A single cell of a track row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u32),
    Missing,
}

impl FieldValue<'_> {
    /// Number of characters the value occupies once rendered.
    pub fn display_len(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            FieldValue::Number(n) => n.to_string().len(),
            FieldValue::Missing => 0,
        }
    }
}

fn text(v: &Option<String>) -> FieldValue<'_> {
    v.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
}

impl TrackRecord {
    /// Row values in [`COLUMNS`] order.
    pub fn values(&self) -> [FieldValue<'_>; 8] {
        [
            text(&self.artist),
            text(&self.title),
            FieldValue::Text(&self.duration),
            text(&self.album),
            self.track.map_or(FieldValue::Missing, FieldValue::Number),
            text(&self.genre),
            FieldValue::Text(&self.filename),
            text(&self.comment),
        ]
    }
}

/// Present values ascending, missing values after all of them.
fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Album order: byte-wise and case-sensitive, untagged albums last.
pub fn compare_album(a: &TrackRecord, b: &TrackRecord) -> Ordering {
    missing_last(a.album.as_deref(), b.album.as_deref())
}

/// Track order: numeric, untagged tracks last.
pub fn compare_track(a: &TrackRecord, b: &TrackRecord) -> Ordering {
    missing_last(a.track, b.track)
}
