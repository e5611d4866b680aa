use std::path::Path;

use log::info;

use crate::error::Result;
use crate::library::TrackRecord;

/// Write one header row plus one row per record, in the given order.
///
/// Missing values become empty fields. Quoting follows the usual CSV rules.
pub fn write_csv(path: &Path, records: &[TrackRecord]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;
    write_records(&mut wtr, records)?;
    wtr.flush().map_err(::csv::Error::from)?;
    info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

pub(super) fn write_records<W: std::io::Write>(
    wtr: &mut ::csv::Writer<W>,
    records: &[TrackRecord],
) -> Result<()> {
    if records.is_empty() {
        // serialize() derives the header from the first record.
        wtr.write_record(crate::library::COLUMNS)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    Ok(())
}
