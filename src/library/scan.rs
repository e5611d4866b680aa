use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::Result;

use super::metadata::read_track;
use super::model::TrackRecord;

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Suffix match on the whole file name, so a file named just `.mp3` counts.
fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase())
        .map(|name| {
            exts.iter()
                .any(|e| name.strip_suffix(e.as_str()).is_some_and(|rest| rest.ends_with('.')))
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Read every audio file directly inside `dir`.
///
/// Subdirectories are not entered. Records come back in file-name order so
/// repeated runs over the same folder produce the same output. The first
/// listing or tag-read error aborts the scan.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<TrackRecord>> {
    let exts = normalized_extensions(settings);
    let mut tracks: Vec<TrackRecord> = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, &exts)
        {
            debug!("reading tags from {}", path.display());
            tracks.push(read_track(path)?);
        }
    }

    info!("scanned {} audio files in {}", tracks.len(), dir.display());
    Ok(tracks)
}
