//! Salary extraction for the Florianópolis municipal payroll layout.
//!
//! Each page covers one year (`ANO: 2021`) and lists the statutory base
//! salary on the fixed-earnings line, one amount per month.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::document::DecodedDocument;
use crate::models::SalaryRecord;

use super::amount::{AMOUNT_RE, parse_amount};
use super::ordering::sort_by_month;

/// Label of the payroll line carrying the statutory base salary.
pub const FIXED_EARNINGS_LABEL: &str = "0020 VENCIMENTO ESTATUTARIO";

/// Maximum number of amounts read from one fixed-earnings line.
pub const MONTHS_PER_YEAR: usize = 12;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ANO:\s*([0-9]{4})").expect("year pattern is valid"));

/// Extracts the salary table from a municipal payroll statement.
///
/// Pages without an `ANO:` year are skipped. On every fixed-earnings line
/// the Nth amount is assigned month N of the page's year, up to twelve
/// amounts. The table is sorted by month.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::document::DecodedDocument;
/// use extrator_previdenciario::extraction::extract_municipal_salaries;
///
/// let document = DecodedDocument::from_page_texts([
///     "ANO: 2021\n0020 VENCIMENTO ESTATUTARIO 1.000,00 1.100,00",
/// ]);
/// let salaries = extract_municipal_salaries(&document);
/// assert_eq!(salaries.len(), 2);
/// assert_eq!(salaries[1].month, "02/2021");
/// ```
pub fn extract_municipal_salaries(document: &DecodedDocument) -> Vec<SalaryRecord> {
    let mut records = Vec::new();

    for text in document.text_pages() {
        let Some(year) = YEAR_RE.captures(text).map(|captures| captures[1].to_string()) else {
            debug!("Skipping page without a year");
            continue;
        };

        for line in text
            .lines()
            .filter(|line| line.trim().starts_with(FIXED_EARNINGS_LABEL))
        {
            // Months follow match position, so an unreadable amount leaves
            // a gap instead of shifting the later months.
            for (index, found) in AMOUNT_RE
                .find_iter(line)
                .take(MONTHS_PER_YEAR)
                .enumerate()
            {
                let month = format!("{:02}/{}", index + 1, year);
                match parse_amount(found.as_str()) {
                    Some(amount) => records.push(SalaryRecord::new(month, amount)),
                    None => warn!(%month, amount = found.as_str(), "Skipping unreadable amount"),
                }
            }
        }
    }

    sort_by_month(&mut records);
    debug!(records = records.len(), "Extracted municipal salaries");
    records
}
