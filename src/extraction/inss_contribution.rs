//! Contribution-period extraction for the pension-institute layout.
//!
//! Period lines do not repeat the employer or role; those appear on
//! earlier lines and stay in effect until the document names new ones.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::DecodedDocument;
use crate::models::ContributionPeriodRecord;

const EMPLOYER_MARKER: &str = "Empregador:";
const ROLE_MARKER: &str = "Função:";

static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Período Contribuição:\s*([0-9]{2}/[0-9]{2}/[0-9]{4})\s+a\s+([0-9]{2}/[0-9]{2}/[0-9]{4})",
    )
    .expect("contribution period pattern is valid")
});

/// Employer and role most recently seen while scanning a document.
#[derive(Debug, Default)]
struct CarriedContext {
    employer: Option<String>,
    role: Option<String>,
}

impl CarriedContext {
    /// Updates the context from `lines[index]`, looking at the following
    /// line when the employer marker has nothing after it.
    fn observe(&mut self, lines: &[&str], index: usize) {
        let line = lines[index];

        if let Some((_, after)) = line.rsplit_once(EMPLOYER_MARKER) {
            let mut employer = after.trim();
            if employer.is_empty() {
                if let Some(next) = lines.get(index + 1) {
                    employer = next.trim();
                }
            }
            self.employer = Some(employer.to_string());
        }

        if line.trim().starts_with(ROLE_MARKER) {
            self.role = Some(line.replace(ROLE_MARKER, "").trim().to_string());
        }
    }
}

/// Extracts the contribution periods from a pension-institute statement.
///
/// Rows are returned in the order they appear. Each row takes the employer
/// and role in effect when its period line is read, including values set
/// on that same line.
///
/// # Example
///
/// ```
/// use extrator_previdenciario::document::DecodedDocument;
/// use extrator_previdenciario::extraction::extract_inss_contribution_periods;
///
/// let document = DecodedDocument::from_page_texts([
///     "Empregador: ACME\nFunção: Analista\nPeríodo Contribuição: 01/01/2010 a 31/12/2010",
/// ]);
/// let periods = extract_inss_contribution_periods(&document);
/// assert_eq!(periods[0].employer.as_deref(), Some("ACME"));
/// assert_eq!(periods[0].role.as_deref(), Some("Analista"));
/// ```
pub fn extract_inss_contribution_periods(document: &DecodedDocument) -> Vec<ContributionPeriodRecord> {
    let mut context = CarriedContext::default();
    let mut records = Vec::new();

    for text in document.text_pages() {
        let lines: Vec<&str> = text.lines().collect();

        for (index, line) in lines.iter().enumerate() {
            context.observe(&lines, index);

            if let Some(captures) = PERIOD_RE.captures(line) {
                records.push(ContributionPeriodRecord {
                    start_date: captures[1].to_string(),
                    end_date: captures[2].to_string(),
                    employer: context.employer.clone(),
                    role: context.role.clone(),
                });
            }
        }
    }

    debug!(records = records.len(), "Extracted INSS contribution periods");
    records
}
