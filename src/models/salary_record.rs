//! Salary record model.
//!
//! A [`SalaryRecord`] is one row of a salary table: the month a salary
//! refers to and the amount paid, as read from either supported layout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of salary history.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::models::SalaryRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = SalaryRecord::new("01/2020", Decimal::from_str("1234.56").unwrap());
/// assert_eq!(record.month, "01/2020");
/// assert!(record.month_date().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Reference month in `MM/YYYY` form.
    #[serde(rename = "Mês")]
    pub month: String,
    /// Amount paid for the month.
    #[serde(rename = "Salário")]
    pub amount: Decimal,
}

impl SalaryRecord {
    /// Column headers used when the record is exported.
    pub const COLUMNS: [&'static str; 2] = ["Mês", "Salário"];

    /// Creates a new salary record.
    pub fn new(month: impl Into<String>, amount: Decimal) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }

    /// Parses the month text into the first day of that month.
    ///
    /// Returns `None` when the text has the `MM/YYYY` shape but does not
    /// name a calendar month (for example `13/2020`).
    pub fn month_date(&self) -> Option<NaiveDate> {
        let (month, year) = self.month.split_once('/')?;
        let month: u32 = month.parse().ok()?;
        let year: i32 = year.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    }
}
