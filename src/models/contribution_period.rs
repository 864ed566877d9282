//! Contribution period model.

use serde::{Deserialize, Serialize};

/// A contribution period listed in a pension-institute statement.
///
/// The employer and role are the values most recently seen in the
/// document when the period line was read, so either may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPeriodRecord {
    /// First day of the period, `DD/MM/YYYY`.
    #[serde(rename = "Data início")]
    pub start_date: String,
    /// Last day of the period, `DD/MM/YYYY`.
    #[serde(rename = "Data final")]
    pub end_date: String,
    /// Employer in effect for this period.
    #[serde(rename = "Empresa")]
    pub employer: Option<String>,
    /// Role in effect for this period.
    #[serde(rename = "Cargo")]
    pub role: Option<String>,
}

impl ContributionPeriodRecord {
    /// Column headers used when the record is exported.
    pub const COLUMNS: [&'static str; 4] = ["Data início", "Data final", "Empresa", "Cargo"];
}
