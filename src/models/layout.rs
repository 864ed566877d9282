//! Supported document layouts.
//!
//! Each layout fixes which extractors run over an uploaded document and
//! how the resulting workbook is named.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractorError, ExtractorResult};

/// Placeholder shown in the layout select before a choice is made.
pub const LAYOUT_PLACEHOLDER: &str = "Selecione...";

/// The report layout an uploaded PDF follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// National pension-institute statement ("INSS – CTC").
    #[serde(rename = "inss")]
    InssCtc,
    /// Florianópolis municipal payroll statement.
    #[serde(rename = "prefeitura")]
    MunicipalFlorianopolis,
}

impl Layout {
    /// All supported layouts, in the order they are offered to the user.
    pub const ALL: [Layout; 2] = [Layout::InssCtc, Layout::MunicipalFlorianopolis];

    /// Short identifier used by the upload form and the API.
    pub fn slug(self) -> &'static str {
        match self {
            Layout::InssCtc => "inss",
            Layout::MunicipalFlorianopolis => "prefeitura",
        }
    }

    /// Human-readable name shown in the layout select.
    pub fn label(self) -> &'static str {
        match self {
            Layout::InssCtc => "INSS – CTC",
            Layout::MunicipalFlorianopolis => "Prefeitura Municipal de Florianópolis",
        }
    }

    /// Name of the spreadsheet offered for download.
    pub fn download_file_name(self) -> &'static str {
        match self {
            Layout::InssCtc => "INSS_completo.xlsx",
            Layout::MunicipalFlorianopolis => "Prefeitura_salarios.xlsx",
        }
    }

    /// Worksheet names, one per extracted table.
    pub fn sheet_names(self) -> &'static [&'static str] {
        match self {
            Layout::InssCtc => &["Salários", "Tempo de Contribuição"],
            Layout::MunicipalFlorianopolis => &["Sheet1"],
        }
    }

    /// Resolves the value submitted by the layout select.
    ///
    /// An empty value or the placeholder means nothing was selected and no
    /// extraction must run.
    pub fn from_selection(value: &str) -> ExtractorResult<Layout> {
        let value = value.trim();
        if value.is_empty() || value == LAYOUT_PLACEHOLDER {
            return Err(ExtractorError::LayoutNotSelected);
        }
        value.parse()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Layout {
    type Err = ExtractorError;

    /// Accepts either the slug or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.slug() == s || layout.label() == s)
            .ok_or_else(|| ExtractorError::UnsupportedLayout {
                layout: s.to_string(),
            })
    }
}
