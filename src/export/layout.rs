use crate::config::SheetSettings;
use crate::library::COLUMNS;
use crate::report::Sheet;

/// Widest column a workbook accepts, in characters.
pub const MAX_COLUMN_WIDTH: u16 = 255;

/// Cosmetic layout for one sheet, computed before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Width per column, in characters.
    pub widths: Vec<f64>,
    /// Header background as 24-bit RGB.
    pub header_rgb: u32,
}

impl SheetLayout {
    pub fn for_sheet(sheet: &Sheet<'_>, settings: &SheetSettings) -> Self {
        Self {
            widths: column_widths(sheet, settings.width_padding)
                .into_iter()
                .map(f64::from)
                .collect(),
            header_rgb: settings.header_rgb().unwrap_or(0xDDDDDD),
        }
    }
}

/// Longest rendered cell per column, header included, plus `padding`.
/// Capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths(sheet: &Sheet<'_>, padding: u16) -> Vec<u16> {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.chars().count()).collect();

    for row in &sheet.rows {
        for (w, value) in widths.iter_mut().zip(row.values()) {
            *w = (*w).max(value.display_len());
        }
    }

    widths
        .into_iter()
        .map(|w| {
            u16::try_from(w)
                .unwrap_or(u16::MAX)
                .saturating_add(padding)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
