//! Spreadsheet writing.
//!
//! Tables are written with `rust_xlsxwriter`: one worksheet per table, a
//! header row followed by one row per record.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::config::ExportConfig;
use crate::error::ExtractorResult;
use crate::models::Extraction;

use super::sheet::{Cell, SheetRecord};

/// MIME type of the generated workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A generated spreadsheet ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Download name, e.g. `INSS_completo.xlsx`.
    pub file_name: &'static str,
    /// Workbook contents.
    pub bytes: Vec<u8>,
}

/// Writes every table of an extraction into one workbook.
///
/// Sheet names and the file name come from the extraction's layout. An
/// empty table produces a sheet with only the header row.
pub fn export_workbook(extraction: &Extraction, config: &ExportConfig) -> ExtractorResult<ExportFile> {
    let layout = extraction.layout();
    let sheet_names = layout.sheet_names();
    let header_format = if config.header_bold {
        Format::new().set_bold()
    } else {
        Format::new()
    };

    let mut workbook = Workbook::new();
    match extraction {
        Extraction::Inss {
            salaries,
            contribution_periods,
        } => {
            write_sheet(workbook.add_worksheet(), sheet_names[0], &header_format, salaries)?;
            write_sheet(
                workbook.add_worksheet(),
                sheet_names[1],
                &header_format,
                contribution_periods,
            )?;
        }
        Extraction::Municipal { salaries } => {
            write_sheet(workbook.add_worksheet(), sheet_names[0], &header_format, salaries)?;
        }
    }

    Ok(ExportFile {
        file_name: layout.download_file_name(),
        bytes: workbook.save_to_buffer()?,
    })
}

fn write_sheet<R: SheetRecord>(
    worksheet: &mut Worksheet,
    name: &str,
    header_format: &Format,
    records: &[R],
) -> Result<(), XlsxError> {
    worksheet.set_name(name)?;

    for (col, header) in R::HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, cell) in record.cells().into_iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Number(value) => match value.to_f64() {
                    Some(number) => {
                        worksheet.write_number(row, col, number)?;
                    }
                    None => {
                        worksheet.write_string(row, col, value.to_string())?;
                    }
                },
                Cell::Empty => {}
            }
        }
    }

    Ok(())
}
