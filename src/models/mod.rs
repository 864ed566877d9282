//! Core data models for the extractor.
//!
//! This module contains the record types produced by the extractors, the
//! supported layouts and the per-document extraction result.

mod contribution_period;
mod extraction;
mod layout;
mod salary_record;

pub use contribution_period::ContributionPeriodRecord;
pub use extraction::Extraction;
pub use layout::{LAYOUT_PLACEHOLDER, Layout};
pub use salary_record::SalaryRecord;
