//! Configuration loader and schema types.
//!
//! This module exposes the settings that pick the scanned folder, the output
//! paths and the workbook styling, plus helpers to load them from disk.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
