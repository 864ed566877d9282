//! Extraction result model.
//!
//! An [`Extraction`] holds the tables produced for one uploaded document,
//! shaped by the layout that was selected.

use serde::Serialize;

use super::{ContributionPeriodRecord, Layout, SalaryRecord};

/// The tables extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Extraction {
    /// Tables read from a pension-institute statement.
    Inss {
        /// Salary history, ordered by month.
        salaries: Vec<SalaryRecord>,
        /// Contribution periods, in document order.
        contribution_periods: Vec<ContributionPeriodRecord>,
    },
    /// Table read from a municipal payroll statement.
    Municipal {
        /// Salary history, ordered by month.
        salaries: Vec<SalaryRecord>,
    },
}

impl Extraction {
    /// The layout this extraction was produced for.
    pub fn layout(&self) -> Layout {
        match self {
            Extraction::Inss { .. } => Layout::InssCtc,
            Extraction::Municipal { .. } => Layout::MunicipalFlorianopolis,
        }
    }

    /// The salary table, present for every layout.
    pub fn salaries(&self) -> &[SalaryRecord] {
        match self {
            Extraction::Inss { salaries, .. } | Extraction::Municipal { salaries } => salaries,
        }
    }

    /// Total number of rows across all tables.
    pub fn record_count(&self) -> usize {
        match self {
            Extraction::Inss {
                salaries,
                contribution_periods,
            } => salaries.len() + contribution_periods.len(),
            Extraction::Municipal { salaries } => salaries.len(),
        }
    }

    /// Returns true if no table has any row.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
