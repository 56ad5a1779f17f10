//! IFSC (Indian Financial System Code) extraction.

use tracing::debug;

use super::normalize::repair_ifsc_prefix;
use super::patterns::IFSC_LABELED;
use super::FieldExtractor;

/// IFSC field extractor.
///
/// Only the labeled form is trusted: an 11-character alphanumeric token is
/// far too common in statement tables to match bare. The captured code gets
/// its bank prefix repaired for digit-shaped OCR misreads.
pub struct IfscExtractor;

impl IfscExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IfscExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IfscExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let caps = IFSC_LABELED.captures(text)?;
        let raw = caps.get(1)?.as_str().to_uppercase();
        debug!("found labeled IFSC: {}", raw);
        Some(repair_ifsc_prefix(&raw))
    }
}

/// Extract an IFSC code from text.
pub fn extract_ifsc(text: &str) -> Option<String> {
    IfscExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ifsc_labeled() {
        assert_eq!(
            extract_ifsc("IFSC CODE: SBIN0001234"),
            Some("SBIN0001234".to_string())
        );
        assert_eq!(
            extract_ifsc("IFSC - HDFC0000123"),
            Some("HDFC0000123".to_string())
        );
    }

    #[test]
    fn test_extract_ifsc_repairs_prefix() {
        // 5 read as S, 1 read as I in the bank prefix
        assert_eq!(
            extract_ifsc("IFSC: 5B1N0001234"),
            Some("SBIN0001234".to_string())
        );
    }

    #[test]
    fn test_extract_ifsc_needs_label() {
        // bare code without the label vocabulary is ignored
        assert_eq!(extract_ifsc("REF SBIN0001234 TXN"), None);
    }

    #[test]
    fn test_extract_ifsc_requires_fifth_zero() {
        assert_eq!(extract_ifsc("IFSC: SBIN1001234"), None);
    }
}
