//! Error type shared by the scanner, the report writers and the runtime.

use std::path::PathBuf;

/// Every failure aborts the run; variants only say where it came from.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read tags from '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
