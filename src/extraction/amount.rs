//! Brazilian currency amount parsing.
//!
//! Statements print amounts as `1.234,56`: `.` groups thousands and `,`
//! separates the two decimal places.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Pattern of an amount as printed in the statements.
///
/// Only ASCII digits count, so every match is something [`parse_amount`]
/// can read.
pub const AMOUNT_PATTERN: &str = r"[0-9.]+,[0-9]{2}";

pub(crate) static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT_PATTERN).expect("amount pattern is valid"));

/// Converts an amount such as `10.000,50` into a [`Decimal`].
///
/// Thousands separators are dropped and the decimal comma becomes a point.
/// Returns `None` if the text does not have a decimal comma followed by
/// digits only, or if the value is too large for a [`Decimal`]. Text
/// matched by [`AMOUNT_PATTERN`] only fails on the size limit.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::extraction::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount("10.000,50"), Some(Decimal::from_str("10000.50").unwrap()));
/// assert_eq!(parse_amount("999,99"), Some(Decimal::from_str("999.99").unwrap()));
/// ```
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let (integer, fraction) = text.rsplit_once(',')?;
    let integer: String = integer.chars().filter(|c| *c != '.').collect();
    if !integer.chars().all(|c| c.is_ascii_digit())
        || fraction.is_empty()
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let integer = if integer.is_empty() { "0" } else { &integer };
    Decimal::from_str(&format!("{integer}.{fraction}")).ok()
}
