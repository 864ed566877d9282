//! Chronological ordering of salary tables.

use tracing::warn;

use crate::models::SalaryRecord;

/// Sorts salary records by calendar month, oldest first.
///
/// The sort is stable, so records for the same month keep their document
/// order. Records whose month text is not a real calendar month are kept
/// and placed after every valid month.
pub fn sort_by_month(records: &mut [SalaryRecord]) {
    if records.is_empty() {
        return;
    }

    let invalid = records
        .iter()
        .filter(|record| record.month_date().is_none())
        .count();
    if invalid > 0 {
        warn!(invalid, "Salary records with an invalid month were ordered last");
    }

    records.sort_by_key(|record| match record.month_date() {
        Some(date) => (false, Some(date)),
        None => (true, None),
    });
}

/// Returns true if the records are in non-decreasing month order.
pub fn is_sorted_by_month(records: &[SalaryRecord]) -> bool {
    records.windows(2).all(|pair| {
        match (pair[0].month_date(), pair[1].month_date()) {
            (Some(a), Some(b)) => a <= b,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    })
}
