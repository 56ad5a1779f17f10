//! Configuration structures for the extraction pipeline.
//!
//! The original service relied on process-global state and hard-coded tool
//! paths; here everything is an explicit, immutable config object built once
//! at startup and passed into the orchestrator.

use serde::{Deserialize, Serialize};

/// Main configuration for the statex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatexConfig {
    /// PDF text acquisition configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for StatexConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF text acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length to consider a PDF as having a usable text layer.
    pub min_text_length: usize,

    /// Marker inserted between the first and last page in first+last scope.
    pub page_break_marker: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            page_break_marker: "--- PAGE BREAK ---".to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters to scan after a label keyword for its value (DOB, generic
    /// balance tiers).
    pub label_window: usize,

    /// Lines below a table header to scan for a balance value.
    pub table_scan_lines: usize,

    /// Characters of context around a numeric token checked for date/time
    /// fragments before accepting it as a balance.
    pub date_context_window: usize,

    /// Accepted account number length range, in digits.
    pub account_number_min_digits: usize,
    pub account_number_max_digits: usize,

    /// Plausible birth year range for the low-confidence DOB fallback.
    pub birth_year_min: i32,
    pub birth_year_max: i32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            label_window: 50,
            table_scan_lines: 3,
            date_context_window: 30,
            account_number_min_digits: 8,
            account_number_max_digits: 18,
            birth_year_min: 1900,
            birth_year_max: 2024,
        }
    }
}

impl StatexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
