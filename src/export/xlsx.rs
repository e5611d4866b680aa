use std::path::Path;

use log::{debug, info};
use rust_xlsxwriter::{
    Color, ColNum, Format, FormatAlign, FormatBorder, FormatPattern, RowNum, Workbook, Worksheet,
    XlsxError,
};

use crate::config::SheetSettings;
use crate::error::Result;
use crate::library::{COLUMNS, FieldValue};
use crate::report::{Report, Sheet};

use super::layout::SheetLayout;

struct Formats {
    header: Format,
    body: Format,
}

impl Formats {
    fn new(layout: &SheetLayout) -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_pattern(FormatPattern::Solid)
                .set_background_color(Color::RGB(layout.header_rgb))
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            body: Format::new().set_border(FormatBorder::Thin),
        }
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet<'_>, layout: &SheetLayout) -> Result<()> {
    let formats = Formats::new(layout);
    worksheet.set_name(&sheet.name)?;
    debug!("writing sheet '{}' ({:?}, {} rows)", sheet.name, sheet.kind, sheet.rows.len());

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, *header, &formats.header)?;
    }

    for (i, record) in sheet.rows.iter().enumerate() {
        let row = RowNum::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, value) in record.values().into_iter().enumerate() {
            let col = col as ColNum;
            match value {
                FieldValue::Text(s) => {
                    worksheet.write_string_with_format(row, col, s, &formats.body)?;
                }
                FieldValue::Number(n) => {
                    worksheet.write_number_with_format(row, col, n, &formats.body)?;
                }
                FieldValue::Missing => {
                    worksheet.write_blank(row, col, &formats.body)?;
                }
            }
        }
    }

    for (col, width) in layout.widths.iter().enumerate() {
        worksheet.set_column_width(col as ColNum, *width)?;
    }

    Ok(())
}

/// Lay out every sheet of `report` into an unsaved workbook.
///
/// Header cells are bold, filled and centered; every cell in the used range,
/// blanks included, gets a thin border.
pub fn build_workbook(report: &Report<'_>, settings: &SheetSettings) -> Result<Workbook> {
    let layouts: Vec<SheetLayout> = report
        .sheets
        .iter()
        .map(|sheet| SheetLayout::for_sheet(sheet, settings))
        .collect();

    let mut workbook = Workbook::new();
    for (sheet, layout) in report.sheets.iter().zip(&layouts) {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, layout)?;
    }
    Ok(workbook)
}

/// Build the workbook and save it to `path`.
pub fn write_workbook(path: &Path, report: &Report<'_>, settings: &SheetSettings) -> Result<()> {
    let mut workbook = build_workbook(report, settings)?;
    workbook.save(path)?;
    info!("wrote {} sheets to {}", report.sheets.len(), path.display());
    Ok(())
}
