//! Salary extraction for the pension-institute (INSS – CTC) layout.
//!
//! The statement lists salaries as `MM/YYYY  1.234,56` pairs and packs
//! several of them on one visual line, separated by `|`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::DecodedDocument;
use crate::models::SalaryRecord;

use super::amount::parse_amount;
use super::ordering::sort_by_month;

static MONTH_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}/[0-9]{4})\s+([0-9.]+,[0-9]{2})")
        .expect("month/amount pattern is valid")
});

/// Extracts the salary table from a pension-institute statement.
///
/// Every `|`-separated fragment of every line yields at most one record:
/// the first month followed by an amount. The table is sorted by month.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::document::DecodedDocument;
/// use extrator_previdenciario::extraction::extract_inss_salaries;
///
/// let document = DecodedDocument::from_page_texts(["02/2020 1.500,00 | 01/2020 1.234,56"]);
/// let salaries = extract_inss_salaries(&document);
/// assert_eq!(salaries[0].month, "01/2020");
/// assert_eq!(salaries[1].month, "02/2020");
/// ```
pub fn extract_inss_salaries(document: &DecodedDocument) -> Vec<SalaryRecord> {
    let mut records: Vec<SalaryRecord> = document
        .text_pages()
        .flat_map(str::lines)
        .flat_map(|line| line.split('|'))
        .filter_map(parse_fragment)
        .collect();

    sort_by_month(&mut records);
    debug!(records = records.len(), "Extracted INSS salaries");
    records
}

fn parse_fragment(fragment: &str) -> Option<SalaryRecord> {
    let captures = MONTH_AMOUNT_RE.captures(fragment)?;
    let amount = parse_amount(&captures[2])?;
    Some(SalaryRecord::new(&captures[1], amount))
}
