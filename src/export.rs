//! Output writers: the flat CSV table and the per-album workbook.

mod csv;
mod layout;
mod xlsx;

pub use self::csv::write_csv;
pub use layout::{SheetLayout, column_widths};
pub use xlsx::{build_workbook, write_workbook};
