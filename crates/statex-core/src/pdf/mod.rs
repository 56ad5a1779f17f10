//! PDF text acquisition.
//!
//! Converts an uploaded document into a single upper-cased text blob, scoped
//! to the pages the requested field prefers. Scanned PDFs without a text
//! layer yield an empty string; the extraction layer treats that as
//! "nothing found" for every field.

mod extractor;

pub use extractor::{PdfExtractor, acquire_text, acquire_text_scoped};

use serde::{Deserialize, Serialize};

use crate::error::PdfError;

/// Which pages of the document to acquire text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageScope {
    /// First page only (identity header blocks).
    FirstPage,
    /// First and last page (balance summaries).
    FirstAndLast,
    /// Every page.
    AllPages,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
