use std::path::PathBuf;

use log::debug;

use crate::config::{ExportSettings, Settings, resolve_config_path};
use crate::error::{Error, Result};

/// Positional arguments override the configured paths, in order:
/// source folder, CSV destination, workbook destination.
pub(super) fn apply_args(mut export: ExportSettings, args: &[String]) -> ExportSettings {
    if let Some(dir) = args.first() {
        export.source_dir = PathBuf::from(dir);
    }
    if let Some(csv) = args.get(1) {
        export.csv_path = Some(PathBuf::from(csv));
    }
    if let Some(xlsx) = args.get(2) {
        export.xlsx_path = Some(PathBuf::from(xlsx));
    }
    export
}

/// Settings for one export run: config file and env, then positional paths.
///
/// A broken or invalid config stops the run before anything is scanned or
/// written, so output never lands in a directory the user did not pick.
pub fn resolve_settings(args: &[String]) -> Result<Settings> {
    debug!("config file: {:?}", resolve_config_path());
    let mut settings = Settings::load()?;
    settings.export = apply_args(settings.export, args);
    settings.validate().map_err(Error::InvalidConfig)?;
    Ok(settings)
}
