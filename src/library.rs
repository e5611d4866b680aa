//! Folder scanning and tag extraction.
//!
//! `scan` lists the direct children of a folder, keeps the configured audio
//! extensions and turns each file into a [`TrackRecord`].

mod metadata;
mod model;
mod scan;

pub use metadata::{format_duration, read_track};
pub use model::*;
pub use scan::scan;
