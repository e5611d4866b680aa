use std::env;
use std::path::PathBuf;

use log::info;

use crate::config::Settings;
use crate::error::Result;
use crate::export::{write_csv, write_workbook};
use crate::library::scan;
use crate::report::Report;

mod settings;


pub fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let settings = settings::resolve_settings(&args)?;

    let (csv_path, xlsx_path) = extract(&settings)?;

    println!("Metadata extracted and saved to '{}'", csv_path.display());
    println!(
        "Metadata extracted and saved to '{}' with separate sheets for each album and an '{}' sheet.",
        xlsx_path.display(),
        settings.sheet.all_songs_name
    );
    Ok(())
}

/// Scan, then write the CSV and the workbook. Returns the two paths written.
///
/// The CSV is written before the workbook is built, so it survives a
/// workbook failure.
pub fn extract(settings: &Settings) -> Result<(PathBuf, PathBuf)> {
    let export = &settings.export;
    let csv_path = export.csv_path();
    let xlsx_path = export.xlsx_path();

    info!("scanning {}", export.source_dir.display());
    let tracks = scan(&export.source_dir, &settings.library)?;

    write_csv(&csv_path, &tracks)?;

    let report = Report::build(&tracks, &settings.sheet);
    info!(
        "grouped {} tracks into {} album sheets",
        report.all_songs().rows.len(),
        report.album_sheets().len()
    );
    write_workbook(&xlsx_path, &report, &settings.sheet)?;

    Ok((csv_path, xlsx_path))
}
