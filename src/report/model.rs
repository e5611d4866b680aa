use log::debug;

use crate::config::SheetSettings;
use crate::library::{TrackRecord, compare_album, compare_track};

use super::naming::SheetNamer;

/// What a sheet holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetKind {
    /// Every record, ordered by album then track.
    AllSongs,
    /// Records sharing one album value (`None` for untagged), ordered by track.
    Album(Option<String>),
}

/// One worksheet: a unique name and the records it lists, in row order.
#[derive(Debug, Clone)]
pub struct Sheet<'a> {
    pub name: String,
    pub kind: SheetKind,
    pub rows: Vec<&'a TrackRecord>,
}

/// The whole workbook, all-songs sheet first and then one sheet per album.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub sheets: Vec<Sheet<'a>>,
}

impl<'a> Report<'a> {
    /// Group and order `records`.
    ///
    /// Both sorts are stable, so records with equal keys keep their scan order.
    pub fn build(records: &'a [TrackRecord], settings: &SheetSettings) -> Self {
        let mut namer = SheetNamer::new();

        let mut all: Vec<&TrackRecord> = records.iter().collect();
        all.sort_by(|a, b| compare_album(a, b).then_with(|| compare_track(a, b)));

        let mut sheets = vec![Sheet {
            name: namer.claim(&settings.all_songs_name, &settings.all_songs_name),
            kind: SheetKind::AllSongs,
            rows: all.clone(),
        }];

        // `all` is already album-ordered, so each album is one contiguous run
        // with its tracks sorted.
        for group in all.chunk_by(|a, b| a.album == b.album) {
            let album = group[0].album.clone();
            let raw = album.as_deref().unwrap_or("");
            let name = namer.claim(raw, &settings.unknown_album_name);
            debug!("album {:?} -> sheet '{}' ({} tracks)", album, name, group.len());
            sheets.push(Sheet {
                name,
                kind: SheetKind::Album(album),
                rows: group.to_vec(),
            });
        }

        Self { sheets }
    }

    /// The sheet listing every record.
    pub fn all_songs(&self) -> &Sheet<'a> {
        &self.sheets[0]
    }

    /// Sheets holding a single album each.
    pub fn album_sheets(&self) -> &[Sheet<'a>] {
        &self.sheets[1..]
    }
}
