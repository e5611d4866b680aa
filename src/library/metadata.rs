use std::borrow::Cow;
use std::path::Path;

use lofty::prelude::*;
use lofty::probe::Probe;

use super::model::TrackRecord;
use crate::error::{Error, Result};

/// Format whole seconds as zero-padded `MM:SS`. Minutes are not wrapped into hours.
pub fn format_duration(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Drop blank values; keep everything else byte-for-byte.
fn non_blank(v: Option<Cow<'_, str>>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty()).map(Cow::into_owned)
}

/// Read one audio file into a [`TrackRecord`].
///
/// The container is detected from content first and from the extension
/// second, so a file named just `.mp3` still reads. Uses the primary tag,
/// falling back to the first tag found.
/// A file without tags still yields a record with its duration and filename.
pub fn read_track(path: &Path) -> Result<TrackRecord> {
    let tagged = Probe::open(path)
        .and_then(|probe| Ok(probe.guess_file_type()?))
        .and_then(|probe| probe.read())
        .map_err(|source| Error::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

    let duration = format_duration(tagged.properties().duration().as_secs());
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    Ok(TrackRecord {
        artist: tag.and_then(|t| non_blank(t.artist())),
        title: tag.and_then(|t| non_blank(t.title())),
        duration,
        album: tag.and_then(|t| non_blank(t.album())),
        track: tag.and_then(|t| t.track()),
        genre: tag.and_then(|t| non_blank(t.genre())),
        filename,
        comment: tag.and_then(|t| non_blank(t.comment())),
    })
}
