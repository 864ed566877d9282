//! Extraction logic for the supported statement layouts.
//!
//! This module contains the three table extractors, the amount and month
//! helpers they share, and [`run_extraction`], which picks the extractors
//! for a layout.

mod amount;
mod inss_contribution;
mod inss_salary;
mod municipal_salary;
mod ordering;

pub use amount::{AMOUNT_PATTERN, parse_amount};
pub use inss_contribution::extract_inss_contribution_periods;
pub use inss_salary::extract_inss_salaries;
pub use municipal_salary::{FIXED_EARNINGS_LABEL, MONTHS_PER_YEAR, extract_municipal_salaries};
pub use ordering::{is_sorted_by_month, sort_by_month};

use tracing::info;

use crate::document::DecodedDocument;
use crate::models::{Extraction, Layout};

/// Runs the extractors that apply to `layout` over a decoded document.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::document::DecodedDocument;
/// use extrator_previdenciario::extraction::run_extraction;
/// use extrator_previdenciario::models::{Extraction, Layout};
///
/// let document = DecodedDocument::from_page_texts(["01/2020 1.234,56"]);
/// let extraction = run_extraction(Layout::InssCtc, &document);
/// assert!(matches!(extraction, Extraction::Inss { .. }));
/// assert_eq!(extraction.salaries().len(), 1);
/// ```
pub fn run_extraction(layout: Layout, document: &DecodedDocument) -> Extraction {
    let extraction = match layout {
        Layout::InssCtc => Extraction::Inss {
            salaries: extract_inss_salaries(document),
            contribution_periods: extract_inss_contribution_periods(document),
        },
        Layout::MunicipalFlorianopolis => Extraction::Municipal {
            salaries: extract_municipal_salaries(document),
        },
    };

    info!(
        layout = layout.slug(),
        pages = document.page_count(),
        records = extraction.record_count(),
        "Extraction completed"
    );
    extraction
}
