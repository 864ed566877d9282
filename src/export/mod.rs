//! Spreadsheet export of extracted tables.
//!
//! Each layout is exported as a single `.xlsx` workbook holding one sheet
//! per extracted table.

mod sheet;
mod workbook;

pub use sheet::{Cell, SheetRecord};
pub use workbook::{ExportFile, XLSX_CONTENT_TYPE, export_workbook};
