use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagsheet/config.toml` or `~/.config/tagsheet/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TAGSHEET__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub export: ExportSettings,
    pub sheet: SheetSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            include_hidden: true,
        }
    }
}

/// Where to read from and where the two reports go.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Folder whose direct children are scanned.
    pub source_dir: PathBuf,
    /// CSV destination. Defaults to `<source_dir>/mp3_metadata.csv`.
    pub csv_path: Option<PathBuf>,
    /// Workbook destination. Defaults to `<source_dir>/mp3_metadata.xlsx`.
    pub xlsx_path: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            csv_path: None,
            xlsx_path: None,
        }
    }
}

impl ExportSettings {
    pub fn csv_path(&self) -> PathBuf {
        self.csv_path
            .clone()
            .unwrap_or_else(|| self.source_dir.join("mp3_metadata.csv"))
    }

    pub fn xlsx_path(&self) -> PathBuf {
        self.xlsx_path
            .clone()
            .unwrap_or_else(|| self.source_dir.join("mp3_metadata.xlsx"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    /// Name of the sheet listing every track.
    pub all_songs_name: String,
    /// Sheet name used for tracks without an album tag.
    pub unknown_album_name: String,
    /// Header background as a hex RGB string, e.g. `DDDDDD`.
    pub header_fill: String,
    /// Characters added to the longest cell when sizing a column.
    pub width_padding: u16,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            all_songs_name: "All Songs".to_string(),
            unknown_album_name: "Unknown Album".to_string(),
            header_fill: "DDDDDD".to_string(),
            width_padding: 2,
        }
    }
}

impl SheetSettings {
    /// Parse `header_fill` into a 24-bit RGB value.
    pub fn header_rgb(&self) -> Option<u32> {
        let hex = self.header_fill.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok()
    }
}
