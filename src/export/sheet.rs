//! Row representation of exported records.

use rust_decimal::Decimal;

use crate::models::{ContributionPeriodRecord, SalaryRecord};

/// A single cell value written to a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    /// Text cell.
    Text(&'a str),
    /// Numeric cell.
    Number(Decimal),
    /// Cell left blank.
    Empty,
}

/// A record that can be written as one worksheet row.
pub trait SheetRecord {
    /// Header row of the sheet.
    const HEADERS: &'static [&'static str];

    /// Cells of this record, one per column.
    fn cells(&self) -> Vec<Cell<'_>>;
}

impl SheetRecord for SalaryRecord {
    const HEADERS: &'static [&'static str] = &SalaryRecord::COLUMNS;

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![Cell::Text(&self.month), Cell::Number(self.amount)]
    }
}

impl SheetRecord for ContributionPeriodRecord {
    const HEADERS: &'static [&'static str] = &ContributionPeriodRecord::COLUMNS;

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Text(&self.start_date),
            Cell::Text(&self.end_date),
            optional_text(self.employer.as_deref()),
            optional_text(self.role.as_deref()),
        ]
    }
}

fn optional_text(value: Option<&str>) -> Cell<'_> {
    value.map_or(Cell::Empty, Cell::Text)
}
