//! Test fixtures: real WAV files carrying ID3v2 tags, and env-var guards.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use hound::{SampleFormat, WavSpec, WavWriter};
use lofty::config::WriteOptions;
use lofty::id3::v2::Id3v2Tag;
use lofty::prelude::*;
use lofty::probe::Probe;

use crate::config::LibrarySettings;
use crate::library::TrackRecord;

const SAMPLE_RATE: u32 = 1000;

/// Tags to embed in a fixture. `None` fields are left out of the tag.
#[derive(Debug, Default, Clone)]
pub struct FixtureTags<'a> {
    pub artist: Option<&'a str>,
    pub title: Option<&'a str>,
    pub album: Option<&'a str>,
    pub track: Option<u32>,
    pub genre: Option<&'a str>,
    pub comment: Option<&'a str>,
}

/// Scanner settings that pick up the `.wav` fixtures.
pub fn wav_settings() -> LibrarySettings {
    LibrarySettings {
        extensions: vec!["wav".into()],
        ..LibrarySettings::default()
    }
}

/// Write `secs` seconds of silence to `dir/name` and tag it.
pub fn write_wav(dir: &Path, name: &str, secs: u32, tags: &FixtureTags<'_>) -> PathBuf {
    let path = dir.join(name);
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(&path, spec).unwrap();
    for _ in 0..secs * SAMPLE_RATE {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    let mut tag = Id3v2Tag::default();
    if let Some(v) = tags.artist {
        tag.set_artist(v.to_string());
    }
    if let Some(v) = tags.title {
        tag.set_title(v.to_string());
    }
    if let Some(v) = tags.album {
        tag.set_album(v.to_string());
    }
    if let Some(v) = tags.track {
        tag.set_track(v);
    }
    if let Some(v) = tags.genre {
        tag.set_genre(v.to_string());
    }
    if let Some(v) = tags.comment {
        tag.set_comment(v.to_string());
    }

    let mut tagged = Probe::open(&path)
        .unwrap()
        .guess_file_type()
        .unwrap()
        .read()
        .unwrap();
    tagged.insert_tag(tag.into());
    tagged.save_to_path(&path, WriteOptions::default()).unwrap();
    path
}

/// An in-memory record for report tests that never touch the disk.
pub fn record(filename: &str, album: Option<&str>, track: Option<u32>) -> TrackRecord {
    TrackRecord {
        artist: Some("Artist".into()),
        title: Some(filename.trim_end_matches(".mp3").into()),
        duration: "03:00".into(),
        album: album.map(str::to_string),
        track,
        genre: None,
        filename: filename.into(),
        comment: None,
    }
}

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that touch process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

/// Sets or removes an env var and restores the old value on drop.
pub struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    pub fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}
