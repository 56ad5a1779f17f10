//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PageScope, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor backed by lopdf for structure and pdf-extract for the
/// text layer.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Number of pages in the loaded document.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract the text layer of the entire document.
    pub fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    /// Extract the text of a single page (1-indexed).
    ///
    /// pdf-extract gives one blob for the whole document; pages are
    /// approximated by splitting its lines evenly across the page count.
    pub fn extract_page_text(&self, page: u32) -> Result<String> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let full_text = self.extract_text()?;
        let lines: Vec<&str> = full_text.lines().collect();

        let lines_per_page = lines.len() / page_count as usize;
        let start = ((page - 1) as usize) * lines_per_page;
        let end = if page == page_count {
            lines.len()
        } else {
            (page as usize) * lines_per_page
        };

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }

    /// Acquire the upper-cased text blob for the given page scope.
    pub fn acquire(&self, scope: PageScope, config: &PdfConfig) -> Result<String> {
        let text = match scope {
            PageScope::AllPages => self.extract_text()?,
            PageScope::FirstPage => self.extract_page_text(1)?,
            PageScope::FirstAndLast => {
                let first = self.extract_page_text(1)?;
                let pages = self.page_count();
                if pages > 1 {
                    let last = self.extract_page_text(pages)?;
                    format!("{}\n\n{}\n\n{}", first, config.page_break_marker, last)
                } else {
                    first
                }
            }
        };

        // below the threshold the text layer is just artifacts of a
        // scanned document; treat it as absent
        if text.trim().len() < config.min_text_length {
            debug!("text layer below {} chars, treating as absent", config.min_text_length);
            return Ok(String::new());
        }

        // Upper-case normalization reduces case-related OCR noise; field
        // extractors that need mixed case (email) lower-case on output.
        Ok(text.to_uppercase())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquire upper-cased text from PDF bytes using the default config.
pub fn acquire_text(data: &[u8], scope: PageScope) -> Result<String> {
    acquire_text_scoped(data, scope, &PdfConfig::default())
}

/// Acquire upper-cased text from PDF bytes with an explicit config.
pub fn acquire_text_scoped(data: &[u8], scope: PageScope, config: &PdfConfig) -> Result<String> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    extractor.acquire(scope, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(b"not a pdf").is_err());
    }
}
