use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::report::{MAX_SHEET_NAME_LEN, sanitize_sheet_name};

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `TAGSHEET__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TAGSHEET")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self
            .library
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("library.extensions must name at least one extension".to_string());
        }
        if self.sheet.header_rgb().is_none() {
            return Err(format!(
                "sheet.header_fill must be a 6-digit hex color, got '{}'",
                self.sheet.header_fill
            ));
        }
        let name = &self.sheet.all_songs_name;
        if name.trim().is_empty()
            || name.chars().count() > MAX_SHEET_NAME_LEN
            || name.contains(['[', ']', ':', '*', '?', '/', '\\'])
        {
            return Err(format!("sheet.all_songs_name '{name}' is not a valid sheet name"));
        }
        if sanitize_sheet_name(&self.sheet.unknown_album_name).is_empty() {
            return Err("sheet.unknown_album_name must leave a usable sheet name".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TAGSHEET_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TAGSHEET_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tagsheet/config.toml`
/// or `~/.config/tagsheet/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tagsheet").join("config.toml"))
}
