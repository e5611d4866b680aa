//! In-memory workbook layout: which records land on which sheet, in what order.

mod model;
mod naming;

pub use model::*;
pub use naming::{MAX_SHEET_NAME_LEN, SheetNamer, sanitize_sheet_name};
