//! Page-level text decoding.
//!
//! This module turns uploaded PDF bytes into a [`DecodedDocument`]: the
//! plain text of each page, in page order. The extractors only ever see
//! this type, so they can be exercised without real PDF files.

mod text;

use lopdf::Document;
use tracing::debug;

use crate::error::{ExtractorError, ExtractorResult};

pub use text::page_text;

/// The plain text of every page of a document.
///
/// A page whose text layer is missing or could not be decoded is kept as
/// `None` so page numbering stays intact; extractors skip it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedDocument {
    pages: Vec<Option<String>>,
}

impl DecodedDocument {
    /// Decodes the text layer of a PDF held in memory.
    ///
    /// Fails only when the bytes cannot be opened as a PDF at all. A page
    /// whose content stream cannot be decoded is recorded without text.
    pub fn from_pdf_bytes(bytes: &[u8]) -> ExtractorResult<Self> {
        let document = Document::load_mem(bytes).map_err(|e| ExtractorError::InvalidPdf {
            message: e.to_string(),
        })?;

        let pages = document
            .get_pages()
            .into_iter()
            .map(|(page_number, page_id)| match page_text(&document, page_id) {
                Ok(text) => Some(text),
                Err(err) => {
                    debug!(page = page_number, error = %err, "Page has no decodable text");
                    None
                }
            })
            .collect();

        Ok(Self { pages })
    }

    /// Builds a document from already-decoded page texts.
    ///
    /// # Example
    ///
    /// ```
    /// use extrator_previdenciario::document::DecodedDocument;
    ///
    /// let document = DecodedDocument::from_page_texts(["01/2020 1.234,56", ""]);
    /// assert_eq!(document.page_count(), 2);
    /// assert_eq!(document.text_pages().count(), 1);
    /// ```
    pub fn from_page_texts<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|text| Some(text.into())).collect(),
        }
    }

    /// Builds a document where some pages may lack a text layer.
    pub fn from_optional_pages(pages: Vec<Option<String>>) -> Self {
        Self { pages }
    }

    /// Number of pages, with or without text.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterates over the text of pages that have any, in page order.
    pub fn text_pages(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .filter_map(|page| page.as_deref())
            .filter(|text| !text.is_empty())
    }
}
